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

//! Percentage-based threshold ticks across a position range.

use poolscope_core::math::finite_or;
use poolscope_model::{Position, reports::RangeThresholds};

/// Default lower threshold as a percentage of the tick range.
pub const DEFAULT_LOW_PERCENT: f64 = 10.0;
/// Default upper threshold as a percentage of the tick range.
pub const DEFAULT_HIGH_PERCENT: f64 = 90.0;

/// Computes the threshold ticks of `position` at `low_percent` and `high_percent` of its range.
///
/// Missing or unparseable range bounds default to `0`. See [`range_thresholds`].
#[must_use]
pub fn compute_range_thresholds(
    position: &Position,
    low_percent: f64,
    high_percent: f64,
) -> RangeThresholds {
    range_thresholds(
        i64::from(position.tick_lower().unwrap_or(0)),
        i64::from(position.tick_upper().unwrap_or(0)),
        low_percent,
        high_percent,
    )
}

/// Interpolates two absolute ticks across `[tick_lower, tick_upper]`.
///
/// Each threshold is `round(tick_lower + (tick_upper - tick_lower) * percent / 100)`, rounding
/// half away from zero. Percentages are not clamped, so values outside `[0, 100]` extrapolate
/// beyond the range and a degenerate range collapses both thresholds onto `tick_lower`.
/// Non-finite percentages are treated as `0`.
#[must_use]
pub fn range_thresholds(
    tick_lower: i64,
    tick_upper: i64,
    low_percent: f64,
    high_percent: f64,
) -> RangeThresholds {
    let tick_range = tick_upper - tick_lower;

    RangeThresholds {
        low_threshold: interpolate(tick_lower, tick_range, low_percent),
        high_threshold: interpolate(tick_lower, tick_range, high_percent),
        tick_range,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn interpolate(tick_lower: i64, tick_range: i64, percent: f64) -> i64 {
    let offset = tick_range as f64 * finite_or(percent, 0.0) / 100.0;
    // Float to int casts saturate
    (tick_lower as f64 + offset).round() as i64
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
