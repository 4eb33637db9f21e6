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

//! Position analytics engine for concentrated-liquidity pools.
//!
//! The `poolscope-analysis` crate derives risk signals and aggregate statistics from a snapshot
//! of wallet positions:
//!
//! - Tick range sampling: a bounded, sorted series of points spanning a position's range and the
//!   current pool tick, for drawing a range curve.
//! - Range thresholds: two absolute ticks interpolated at configurable percentages of the range.
//! - Danger detection: whether the current tick sits within a fixed tolerance of a threshold.
//! - Pool aggregation: distinct participants, position counts, liquidity and USD value per pool.
//!
//! Every pass is a pure, synchronous function of the snapshot it is handed. Nothing is cached
//! between calls and the snapshot is never mutated, so independent passes may run concurrently
//! without coordination.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregator;
pub mod config;
pub mod danger;
pub mod position;
pub mod sampler;
pub mod thresholds;

// Re-exports
pub use crate::{
    aggregator::{aggregate_pools, summarize},
    config::{AnalysisConfig, ConfigError},
    danger::{DEFAULT_DANGER_TOLERANCE, detect_danger},
    position::{analyze_position, analyze_positions},
    sampler::{DEFAULT_RESOLUTION_BUDGET, sample_tick_data},
    thresholds::compute_range_thresholds,
};
