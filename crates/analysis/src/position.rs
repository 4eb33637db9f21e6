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

//! Per-position reports combining every analysis pass.

use poolscope_core::math::safe_ratio;
use poolscope_model::{Position, PositionSnapshot, SnapshotError, reports::PositionReport};

use crate::{
    config::AnalysisConfig, danger::detect_danger, sampler::sample_tick_data,
    thresholds::compute_range_thresholds,
};

/// Basis points per percent of a fee tier.
const FEE_TIER_PER_PERCENT: f64 = 10_000.0;

/// Returns the fee tier as a percentage (e.g. `3000` -> `0.3`).
#[must_use]
pub fn fee_tier_percent(position: &Position) -> Option<f64> {
    position.fee_tier().map(|fee_tier| fee_tier / FEE_TIER_PER_PERCENT)
}

/// Returns the total USD value expressed in token1 units.
///
/// Returns `None` when the token1 USD price is missing, unparseable or zero. A missing total
/// value counts as zero.
#[must_use]
pub fn value_in_token1(position: &Position) -> Option<f64> {
    position
        .token1_usd_price()
        .and_then(|price| safe_ratio(position.total_usd_value(), price))
}

/// Returns whether the current pool tick lies within the position range, or `None` when any
/// of the three ticks is missing.
#[must_use]
pub fn is_in_range(position: &Position) -> Option<bool> {
    let lower = position.tick_lower()?;
    let upper = position.tick_upper()?;
    let current = position.current_tick()?;
    Some(lower <= current && current <= upper)
}

/// Runs every analysis pass over `position`.
#[must_use]
pub fn analyze_position(position: &Position, config: &AnalysisConfig) -> PositionReport {
    let thresholds =
        compute_range_thresholds(position, config.low_percent, config.high_percent);
    let danger = detect_danger(position, &thresholds, config.danger_tolerance);
    let samples = if config.include_samples {
        sample_tick_data(position, config.resolution_budget)
    } else {
        Vec::new()
    };

    PositionReport {
        id: position.id.clone(),
        pair: position.pair_label(),
        pool_key: position.pool_key(),
        fee_tier_percent: fee_tier_percent(position),
        current_tick: position.current_tick(),
        tick_lower: position.tick_lower(),
        tick_upper: position.tick_upper(),
        in_range: is_in_range(position),
        thresholds,
        danger,
        value_in_token1: value_in_token1(position),
        samples,
    }
}

/// Runs every analysis pass over each position of the wallet `address`, in input order.
///
/// # Errors
///
/// Returns [`SnapshotError::NoPositions`] if the address is unknown or holds no positions.
pub fn analyze_positions(
    address: &str,
    snapshot: &PositionSnapshot,
    config: &AnalysisConfig,
) -> Result<Vec<PositionReport>, SnapshotError> {
    let positions = snapshot.positions_for(address)?;
    Ok(positions
        .iter()
        .map(|position| analyze_position(position, config))
        .collect())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use poolscope_core::{NumericOrString, approx_eq};
    use poolscope_model::{
        PositionId, UsdValue,
        stubs::{position_eth_usdc, position_without_data, snapshot_two_wallets},
    };
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("3000", Some(0.3))]
    #[case("500", Some(0.05))]
    #[case("100", Some(0.01))]
    #[case("fee", None)]
    fn test_fee_tier_percent(
        mut position_eth_usdc: Position,
        #[case] fee_tier: &str,
        #[case] expected: Option<f64>,
    ) {
        if let Some(pool) = position_eth_usdc.pool.as_mut() {
            pool.fee_tier = Some(NumericOrString::from(fee_tier));
        }

        match (fee_tier_percent(&position_eth_usdc), expected) {
            (Some(percent), Some(expected)) => {
                assert!(approx_eq!(f64, percent, expected, epsilon = 1e-12));
            }
            (percent, expected) => assert_eq!(percent, expected),
        }
    }

    #[rstest]
    #[case(Some("1000"), Some("2000"), Some(0.5))]
    #[case(None, Some("2000"), Some(0.0))]
    #[case(Some("1000"), Some("0"), None)]
    #[case(Some("1000"), None, None)]
    #[case(Some("1000"), Some("price"), None)]
    fn test_value_in_token1(
        #[case] total_value: Option<&str>,
        #[case] token1_price: Option<&str>,
        #[case] expected: Option<f64>,
    ) {
        let position = Position {
            usd_value: Some(UsdValue {
                token0_value: None,
                token1_value: None,
                total_value: total_value.map(NumericOrString::from),
                token1_price: token1_price.map(NumericOrString::from),
            }),
            ..Default::default()
        };

        assert_eq!(value_in_token1(&position), expected);
    }

    #[rstest]
    #[case(100, Some(true))]
    #[case(0, Some(true))]
    #[case(200, Some(true))]
    #[case(201, Some(false))]
    #[case(-1, Some(false))]
    fn test_is_in_range(#[case] current_tick: i32, #[case] expected: Option<bool>) {
        let position = position_eth_usdc(0, 200, current_tick);
        assert_eq!(is_in_range(&position), expected);
    }

    #[rstest]
    fn test_is_in_range_missing_data(position_without_data: Position) {
        assert_eq!(is_in_range(&position_without_data), None);
    }

    #[rstest]
    fn test_analyze_position(position_eth_usdc: Position) {
        let report = analyze_position(&position_eth_usdc, &AnalysisConfig::default());

        assert_eq!(report.id, Some(PositionId::from(1_u64)));
        assert_eq!(report.pair, "ETH/USDC");
        assert_eq!(report.pool_key.as_str(), "ETH-USDC-3000");
        assert_eq!(report.current_tick, Some(100));
        assert_eq!(report.in_range, Some(true));
        assert_eq!(report.thresholds.low_threshold, 20);
        assert_eq!(report.thresholds.high_threshold, 180);
        assert!(!report.danger.is_dangerous);
        assert_eq!(report.value_in_token1, Some(1000.0));
        assert_eq!(report.samples.len(), 201);
    }

    #[rstest]
    fn test_analyze_position_without_samples(position_eth_usdc: Position) {
        let config = AnalysisConfig {
            include_samples: false,
            ..Default::default()
        };
        let report = analyze_position(&position_eth_usdc, &config);

        assert!(report.samples.is_empty());
    }

    #[rstest]
    fn test_analyze_position_uses_config(position_eth_usdc: Position) {
        let config = AnalysisConfig {
            low_percent: 45.0,
            high_percent: 55.0,
            danger_tolerance: 10,
            resolution_budget: 10,
            include_samples: true,
        };
        let report = analyze_position(&position_eth_usdc, &config);

        assert_eq!(report.thresholds.low_threshold, 90);
        assert_eq!(report.thresholds.high_threshold, 110);
        assert!(report.danger.near_low);
        assert!(report.danger.near_high);
        assert_eq!(report.samples.len(), 11);
    }

    #[rstest]
    fn test_analyze_position_without_data(position_without_data: Position) {
        let report = analyze_position(&position_without_data, &AnalysisConfig::default());

        assert_eq!(report.pair, "Token0/Token1");
        assert_eq!(report.pool_key.as_str(), "Token0-Token1-0");
        assert_eq!(report.fee_tier_percent, None);
        assert_eq!(report.in_range, None);
        assert_eq!(report.value_in_token1, None);
        assert!(report.samples.is_empty());
    }

    #[rstest]
    fn test_analyze_positions(snapshot_two_wallets: PositionSnapshot) {
        let reports =
            analyze_positions("0xB", &snapshot_two_wallets, &AnalysisConfig::default()).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].pair, "WBTC/ETH");
        assert_eq!(reports[1].pair, "ETH/USDC");
    }

    #[rstest]
    fn test_analyze_positions_unknown_address(snapshot_two_wallets: PositionSnapshot) {
        let result = analyze_positions("0xC", &snapshot_two_wallets, &AnalysisConfig::default());
        assert!(matches!(result, Err(SnapshotError::NoPositions(_))));
    }
}
