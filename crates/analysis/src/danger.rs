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

//! Proximity alerts between the current pool tick and range thresholds.

use poolscope_model::{
    Position,
    reports::{DangerAlert, RangeThresholds},
};

/// Default proximity, in ticks, at which a threshold is considered near.
///
/// The tolerance is absolute and does not scale with the width of the range.
pub const DEFAULT_DANGER_TOLERANCE: i64 = 50;

/// Flags whether the current tick of `position` lies within `tolerance` ticks of either
/// threshold.
///
/// A missing or unparseable current tick is treated as `0`. See [`danger_alert`].
#[must_use]
pub fn detect_danger(
    position: &Position,
    thresholds: &RangeThresholds,
    tolerance: i64,
) -> DangerAlert {
    danger_alert(
        i64::from(position.current_tick().unwrap_or(0)),
        thresholds,
        tolerance,
    )
}

/// Builds a [`DangerAlert`] for `current_tick` against `thresholds`.
///
/// A threshold is near when `|current_tick - threshold| <= tolerance`, so the boundary itself
/// counts as near. A negative tolerance never matches.
#[must_use]
pub fn danger_alert(current_tick: i64, thresholds: &RangeThresholds, tolerance: i64) -> DangerAlert {
    let near = |threshold: i64| {
        u64::try_from(tolerance).is_ok_and(|tolerance| current_tick.abs_diff(threshold) <= tolerance)
    };
    let near_low = near(thresholds.low_threshold);
    let near_high = near(thresholds.high_threshold);

    DangerAlert {
        is_dangerous: near_low || near_high,
        near_low,
        near_high,
        current_tick,
        low_threshold: thresholds.low_threshold,
        high_threshold: thresholds.high_threshold,
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
