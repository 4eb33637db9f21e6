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

//! Display-ready records derived from a position snapshot.
//!
//! These records are owned by the pass that produced them, carry no reference back to the
//! source positions, and are rebuilt wholesale on every pass.

use std::fmt::{self, Display};

use poolscope_core::math::safe_ratio;
use serde::{Deserialize, Serialize};

use crate::identifiers::{PoolKey, PositionId};

/// Value of [`TickSample::in_range`] for ticks inside the position range.
pub const IN_RANGE_LEVEL: u8 = 100;
/// Value of [`TickSample::liquidity_indicator`] for ticks inside the position range.
pub const LIQUIDITY_LEVEL: u8 = 80;

/// One point of a sampled tick range, used to draw a range curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickSample {
    pub tick: i64,
    /// [`IN_RANGE_LEVEL`] inside the position range, otherwise `0`.
    pub in_range: u8,
    /// [`LIQUIDITY_LEVEL`] inside the position range, otherwise `0`.
    pub liquidity_indicator: u8,
}

impl TickSample {
    /// Creates a [`TickSample`] for `tick`, flagged by whether it lies within the range.
    #[must_use]
    pub const fn new(tick: i64, inside: bool) -> Self {
        if inside {
            Self {
                tick,
                in_range: IN_RANGE_LEVEL,
                liquidity_indicator: LIQUIDITY_LEVEL,
            }
        } else {
            Self {
                tick,
                in_range: 0,
                liquidity_indicator: 0,
            }
        }
    }

    /// Returns whether the sample lies within the position range.
    #[must_use]
    pub const fn is_in_range(&self) -> bool {
        self.in_range == IN_RANGE_LEVEL
    }
}

/// Absolute tick thresholds interpolated across a position range.
///
/// No ordering holds between the two thresholds: a low percentage above the high percentage
/// yields `low_threshold > high_threshold`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeThresholds {
    pub low_threshold: i64,
    pub high_threshold: i64,
    /// `tick_upper - tick_lower`, zero or negative for degenerate ranges.
    pub tick_range: i64,
}

/// Proximity of the current tick to a pair of range thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerAlert {
    pub is_dangerous: bool,
    pub near_low: bool,
    pub near_high: bool,
    pub current_tick: i64,
    pub low_threshold: i64,
    pub high_threshold: i64,
}

/// Aggregate statistics for one pool across a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStat {
    pub pool_key: PoolKey,
    pub token0_symbol: String,
    pub token1_symbol: String,
    pub fee_tier: String,
    /// Number of distinct addresses with at least one position in the pool.
    pub miner_count: usize,
    /// Number of positions in the pool (not the number of addresses).
    pub total_positions: usize,
    /// Contributing addresses in first-seen order.
    pub miners: Vec<String>,
    pub total_liquidity: f64,
    #[serde(rename = "totalUSDValue")]
    pub total_usd_value: f64,
}

impl PoolStat {
    /// Returns the pool's fraction of `total_usd_value`, or `None` if the total is zero or
    /// not finite.
    #[must_use]
    pub fn usd_share(&self, total_usd_value: f64) -> Option<f64> {
        safe_ratio(self.total_usd_value, total_usd_value)
    }
}

impl Display for PoolStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(miners={}, positions={}, liquidity={}, usd={})",
            self.pool_key,
            self.miner_count,
            self.total_positions,
            self.total_liquidity,
            self.total_usd_value,
        )
    }
}

/// Snapshot-wide totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    /// Addresses owning at least one position.
    pub total_addresses: usize,
    pub total_positions: usize,
    pub total_pools: usize,
    /// Distinct addresses across all pools.
    pub total_miners: usize,
    pub total_liquidity: f64,
    #[serde(rename = "totalUSDValue")]
    pub total_usd_value: f64,
}

/// Everything derived for a single position under one analysis configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PositionId>,
    pub pair: String,
    pub pool_key: PoolKey,
    /// Fee tier as a percentage, e.g. `0.3` for a `3000` tier.
    pub fee_tier_percent: Option<f64>,
    pub current_tick: Option<i32>,
    pub tick_lower: Option<i32>,
    pub tick_upper: Option<i32>,
    pub in_range: Option<bool>,
    pub thresholds: RangeThresholds,
    pub danger: DangerAlert,
    /// Total USD value expressed in token1 units, `None` when the ratio is undefined.
    pub value_in_token1: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<TickSample>,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
