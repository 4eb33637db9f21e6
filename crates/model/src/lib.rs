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

//! Domain model for concentrated-liquidity positions.
//!
//! The `poolscope-model` crate defines the shapes exchanged with the collaborators around the
//! analytics engine:
//!
//! - Input records as delivered by the position feed ([`Position`] and its nested parts).
//! - The snapshot envelope mapping wallet addresses to their ordered positions.
//! - Canonical identifiers such as the [`PoolKey`].
//! - Display-ready derived records (tick samples, thresholds, alerts, pool statistics).
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs and `rstest` fixtures for use in tests.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod identifiers;
pub mod position;
pub mod reports;
pub mod snapshot;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use crate::{
    error::SnapshotError,
    identifiers::{PoolKey, PositionId},
    position::{PoolState, Position, TickBoundary, Token, UsdValue},
    snapshot::{AddressPositions, PositionSnapshot},
};
