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

//! Discretization of a position's tick range into a bounded sample series.

use poolscope_model::{Position, reports::TickSample};

/// Default number of steps the sampled domain is divided into.
pub const DEFAULT_RESOLUTION_BUDGET: usize = 1000;

/// Samples the tick domain of `position` for a range visualization.
///
/// Returns an empty series when the lower tick, upper tick or current pool tick is missing or
/// unparseable, signalling there is not enough data to plot.
///
/// See [`sample_tick_range`] for the sampling rules.
#[must_use]
pub fn sample_tick_data(position: &Position, resolution_budget: usize) -> Vec<TickSample> {
    match (
        position.tick_lower(),
        position.tick_upper(),
        position.current_tick(),
    ) {
        (Some(tick_lower), Some(tick_upper), Some(current_tick)) => {
            sample_tick_range(tick_lower, tick_upper, current_tick, resolution_budget)
        }
        _ => Vec::new(),
    }
}

/// Samples the domain `[min(tick_lower, current), max(tick_upper, current)]`.
///
/// The domain always contains the current tick, even when the position is out of range. It is
/// walked in steps of `max(1, floor(width / resolution_budget))`, so at most
/// `2 * resolution_budget + 1` samples are emitted whatever the width. A budget of zero is
/// treated as one.
///
/// Each sample is flagged in range when its tick lies in `[tick_lower, tick_upper]`. When no
/// emitted sample lies strictly within half a step of the current tick, an explicit sample at
/// the current tick is added. The result is sorted ascending by tick.
///
/// An inverted range (`tick_lower > tick_upper`) still yields a well-formed series, in which no
/// sample is in range.
#[must_use]
pub fn sample_tick_range(
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
    resolution_budget: usize,
) -> Vec<TickSample> {
    let lower = i64::from(tick_lower);
    let upper = i64::from(tick_upper);
    let current = i64::from(current_tick);

    if lower > upper {
        log::debug!("Sampling inverted tick range: lower={lower}, upper={upper}");
    }

    let min_tick = lower.min(current);
    let max_tick = upper.max(current);
    let step = sample_step(max_tick - min_tick, resolution_budget);
    let inside = |tick: i64| tick >= lower && tick <= upper;

    let mut samples: Vec<TickSample> = (min_tick..=max_tick)
        .step_by(usize::try_from(step).unwrap_or(usize::MAX))
        .map(|tick| TickSample::new(tick, inside(tick)))
        .collect();

    // Half-step proximity, compared in whole ticks
    let has_current = samples
        .iter()
        .any(|sample| 2 * (sample.tick - current).abs() < step);
    if !has_current {
        samples.push(TickSample::new(current, inside(current)));
    }

    samples.sort_by_key(|sample| sample.tick);
    samples
}

/// Returns the sampling step for a domain of `width` ticks.
#[must_use]
pub fn sample_step(width: i64, resolution_budget: usize) -> i64 {
    let budget = i64::try_from(resolution_budget.max(1)).unwrap_or(i64::MAX);
    (width / budget).max(1)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
