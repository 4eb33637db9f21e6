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

//! Per-pool aggregation across every wallet in a snapshot.

use std::cmp::Reverse;

use indexmap::{IndexMap, IndexSet};
use poolscope_core::math::saturating_sum;
use poolscope_model::{
    AddressPositions, PoolKey, Position, PositionSnapshot,
    reports::{PoolStat, SnapshotSummary},
};

/// Accumulates the positions and contributing addresses of one pool.
#[derive(Debug)]
struct PoolBucket<'a> {
    token0_symbol: &'a str,
    token1_symbol: &'a str,
    fee_tier: String,
    miners: IndexSet<&'a str>,
    positions: Vec<&'a Position>,
}

impl<'a> PoolBucket<'a> {
    fn new(position: &'a Position) -> Self {
        Self {
            token0_symbol: position.token0_symbol(),
            token1_symbol: position.token1_symbol(),
            fee_tier: position.fee_tier_label(),
            miners: IndexSet::new(),
            positions: Vec::new(),
        }
    }

    fn into_stat(self, pool_key: PoolKey) -> PoolStat {
        PoolStat {
            pool_key,
            token0_symbol: self.token0_symbol.to_string(),
            token1_symbol: self.token1_symbol.to_string(),
            fee_tier: self.fee_tier,
            miner_count: self.miners.len(),
            total_positions: self.positions.len(),
            miners: self.miners.iter().map(ToString::to_string).collect(),
            total_liquidity: saturating_sum(self.positions.iter().map(|p| p.liquidity_value())),
            total_usd_value: saturating_sum(self.positions.iter().map(|p| p.total_usd_value())),
        }
    }
}

/// Groups every position of every address by [`PoolKey`] and summarizes each pool.
///
/// An address is counted once per pool however many positions it holds there. Display labels
/// are taken from the first position seen for each pool. Missing or unparseable liquidity and
/// USD values contribute `0`, and totals saturate at `f64::MAX` rather than overflowing.
///
/// The result is sorted by descending miner count. Ties keep the order in which pools were
/// first encountered, walking addresses and their positions in input order.
#[must_use]
pub fn aggregate_pools(positions: &AddressPositions) -> Vec<PoolStat> {
    let mut buckets: IndexMap<PoolKey, PoolBucket<'_>> = IndexMap::new();

    for (address, address_positions) in positions {
        for position in address_positions {
            let bucket = buckets
                .entry(position.pool_key())
                .or_insert_with(|| PoolBucket::new(position));
            bucket.miners.insert(address.as_str());
            bucket.positions.push(position);
        }
    }

    let mut stats: Vec<PoolStat> = buckets
        .into_iter()
        .map(|(pool_key, bucket)| bucket.into_stat(pool_key))
        .collect();

    // Stable sort preserves first-seen order among ties
    stats.sort_by_key(|stat| Reverse(stat.miner_count));

    log::debug!(
        "Aggregated {} pools from {} addresses",
        stats.len(),
        positions.len()
    );

    stats
}

/// Computes snapshot-wide totals from the per-pool aggregation.
#[must_use]
pub fn summarize(snapshot: &PositionSnapshot) -> SnapshotSummary {
    summarize_pools(snapshot, &aggregate_pools(&snapshot.positions))
}

/// Computes snapshot-wide totals from an aggregation already produced for `snapshot`.
#[must_use]
pub fn summarize_pools(snapshot: &PositionSnapshot, pools: &[PoolStat]) -> SnapshotSummary {
    let miners: IndexSet<&str> = pools
        .iter()
        .flat_map(|pool| pool.miners.iter().map(String::as_str))
        .collect();

    SnapshotSummary {
        total_addresses: snapshot.addresses_with_positions().len(),
        total_positions: pools.iter().map(|pool| pool.total_positions).sum(),
        total_pools: pools.len(),
        total_miners: miners.len(),
        total_liquidity: saturating_sum(pools.iter().map(|pool| pool.total_liquidity)),
        total_usd_value: saturating_sum(pools.iter().map(|pool| pool.total_usd_value)),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
