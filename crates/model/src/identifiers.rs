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

//! Identifiers for positions and pools.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Label used for token0 when a position carries no symbol.
pub const TOKEN0_FALLBACK: &str = "Token0";
/// Label used for token1 when a position carries no symbol.
pub const TOKEN1_FALLBACK: &str = "Token1";
/// Label used for the fee tier when a position carries none.
pub const FEE_TIER_FALLBACK: &str = "0";

/// Opaque identifier of a position, as supplied by the position feed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionId {
    Number(serde_json::Number),
    Text(String),
}

impl Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<&str> for PositionId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for PositionId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// Canonical identity of a pool: `token0Symbol-token1Symbol-feeTier`.
///
/// Missing parts are replaced by the literal fallbacks [`TOKEN0_FALLBACK`],
/// [`TOKEN1_FALLBACK`] and [`FEE_TIER_FALLBACK`], so two positions differing only by a missing
/// field belong to different pools.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolKey(String);

impl PoolKey {
    /// Creates a [`PoolKey`] from already resolved labels.
    #[must_use]
    pub fn new(token0_symbol: &str, token1_symbol: &str, fee_tier: &str) -> Self {
        Self(format!("{token0_symbol}-{token1_symbol}-{fee_tier}"))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PoolKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
