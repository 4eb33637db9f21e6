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

//! Floating-point helpers used by the analytics passes.

/// Macro for approximate floating-point equality comparison.
///
/// # Usage
///
/// ```rust
/// use poolscope_core::approx_eq;
///
/// let total = 100.0 + 250.0;
/// assert!(approx_eq!(f64, total, 350.0, epsilon = 1e-10));
/// ```
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr, epsilon = $epsilon:expr) => {{
        let left_val: $type = $left;
        let right_val: $type = $right;
        (left_val - right_val).abs() < $epsilon
    }};
}

/// Divides `numerator` by `denominator`, returning `None` for an undefined ratio.
///
/// The ratio is undefined when the denominator is zero, or when either operand or the
/// quotient is not finite.
///
/// # Examples
///
/// ```
/// use poolscope_core::math::safe_ratio;
///
/// assert_eq!(safe_ratio(1000.0, 2000.0), Some(0.5));
/// assert_eq!(safe_ratio(1000.0, 0.0), None);
/// ```
#[inline]
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return None;
    }

    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}

/// Returns `value` when it is finite, otherwise `fallback`.
#[inline]
#[must_use]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Sums `values`, saturating at `f64::MAX` / `f64::MIN` instead of overflowing to infinity.
///
/// Non-finite terms contribute `0`.
///
/// # Examples
///
/// ```
/// use poolscope_core::math::saturating_sum;
///
/// assert_eq!(saturating_sum([1e308, 1e308]), f64::MAX);
/// ```
#[must_use]
pub fn saturating_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |total, value| {
        (total + finite_or(value, 0.0)).clamp(f64::MIN, f64::MAX)
    })
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
