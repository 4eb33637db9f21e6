// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The address to positions snapshot consumed by every analytics pass.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::SnapshotError, position::Position};

/// Ordered mapping from wallet address to that wallet's positions.
///
/// Insertion order follows the source payload, which fixes the first-seen order used by pool
/// aggregation.
pub type AddressPositions = IndexMap<String, Vec<Position>>;

/// A snapshot of positions for a set of wallet addresses.
///
/// The snapshot is the unit of work for the analytics passes: each pass borrows it immutably
/// and recomputes its results from scratch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    /// Positions keyed by wallet address.
    #[serde(default)]
    pub positions: AddressPositions,
}

impl PositionSnapshot {
    /// Creates a new [`PositionSnapshot`] from an address to positions mapping.
    #[must_use]
    pub const fn from_positions(positions: AddressPositions) -> Self {
        Self { positions }
    }

    /// Decodes a snapshot from the JSON envelope `{"positions": {...}}`.
    ///
    /// A payload without a `positions` field decodes as an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Decode`] if the payload is not a valid envelope.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        log::debug!(
            "Decoded snapshot with {} addresses and {} positions",
            snapshot.positions.len(),
            snapshot.position_count(),
        );
        Ok(snapshot)
    }

    /// Decodes a snapshot from JSON encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Decode`] if the payload is not a valid envelope.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_slice(data)?;
        log::debug!(
            "Decoded snapshot with {} addresses and {} positions",
            snapshot.positions.len(),
            snapshot.position_count(),
        );
        Ok(snapshot)
    }

    /// Reads and decodes a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be read, or
    /// [`SnapshotError::Decode`] if its content is not a valid envelope.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&data)
    }

    /// Returns the addresses which own at least one position, in snapshot order.
    #[must_use]
    pub fn addresses_with_positions(&self) -> Vec<&str> {
        self.positions
            .iter()
            .filter(|(_, positions)| !positions.is_empty())
            .map(|(address, _)| address.as_str())
            .collect()
    }

    /// Returns the positions owned by `address`, matched exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NoPositions`] if the address is unknown or owns no positions.
    pub fn positions_for(&self, address: &str) -> Result<&[Position], SnapshotError> {
        match self.positions.get(address) {
            Some(positions) if !positions.is_empty() => Ok(positions.as_slice()),
            _ => Err(SnapshotError::NoPositions(address.to_string())),
        }
    }

    /// Returns the total number of positions across all addresses.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.values().map(Vec::len).sum()
    }

    /// Returns whether the snapshot holds no positions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position_count() == 0
    }
}

impl From<AddressPositions> for PositionSnapshot {
    fn from(positions: AddressPositions) -> Self {
        Self::from_positions(positions)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
