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

//! Liquidity-pool positions as delivered by the position feed.
//!
//! Every field is optional and every numeric field may arrive as a number or a string. The
//! accessors on [`Position`] resolve fallbacks and coercions in one place so the analytics
//! passes never parse raw fields themselves.

use poolscope_core::{NumericOrString, parse_or_default};
use serde::{Deserialize, Serialize};

use crate::identifiers::{
    FEE_TIER_FALLBACK, PoolKey, PositionId, TOKEN0_FALLBACK, TOKEN1_FALLBACK,
};

/// A token leg of a position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The token symbol, e.g. `ETH`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Token {
    /// Creates a [`Token`] with the given symbol.
    #[must_use]
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
        }
    }

    fn label(&self) -> Option<&str> {
        self.symbol.as_deref().filter(|symbol| !symbol.is_empty())
    }
}

/// Pool-level state attached to a position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolState {
    /// The pool fee parameter in hundredths of a basis point (e.g. `3000` for 0.3%).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_tier: Option<NumericOrString>,
    /// The current pool tick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick: Option<NumericOrString>,
    /// Price of token0 denominated in token1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token0_price: Option<NumericOrString>,
    /// Price of token1 denominated in token0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token1_price: Option<NumericOrString>,
}

/// One boundary of a position's tick range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickBoundary {
    /// The tick index of the boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_idx: Option<NumericOrString>,
}

impl TickBoundary {
    /// Creates a [`TickBoundary`] at the given tick index.
    #[must_use]
    pub fn new(tick_idx: impl Into<NumericOrString>) -> Self {
        Self {
            tick_idx: Some(tick_idx.into()),
        }
    }
}

/// USD valuation of a position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token0_value: Option<NumericOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token1_value: Option<NumericOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<NumericOrString>,
    /// USD price of token1, used to express the position value in token1 units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token1_price: Option<NumericOrString>,
}

/// A concentrated-liquidity position owned by a wallet address.
///
/// Positions are immutable inputs: the analytics passes borrow them and never write back.
/// `tick_lower <= tick_upper` is expected but not guaranteed by the feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PositionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token0: Option<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token1: Option<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_lower: Option<TickBoundary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_upper: Option<TickBoundary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token0_amount: Option<NumericOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token1_amount: Option<NumericOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<NumericOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<UsdValue>,
}

impl Position {
    /// Returns the token0 symbol verbatim, or [`TOKEN0_FALLBACK`] when absent or empty.
    #[must_use]
    pub fn token0_symbol(&self) -> &str {
        self.token0
            .as_ref()
            .and_then(Token::label)
            .unwrap_or(TOKEN0_FALLBACK)
    }

    /// Returns the token1 symbol verbatim, or [`TOKEN1_FALLBACK`] when absent or empty.
    #[must_use]
    pub fn token1_symbol(&self) -> &str {
        self.token1
            .as_ref()
            .and_then(Token::label)
            .unwrap_or(TOKEN1_FALLBACK)
    }

    /// Returns the literal fee tier label, or [`FEE_TIER_FALLBACK`] when absent or empty.
    #[must_use]
    pub fn fee_tier_label(&self) -> String {
        self.pool
            .as_ref()
            .and_then(|pool| pool.fee_tier.as_ref())
            .and_then(NumericOrString::label)
            .unwrap_or_else(|| FEE_TIER_FALLBACK.to_string())
    }

    /// Returns the fee tier as a number, if present and numeric.
    #[must_use]
    pub fn fee_tier(&self) -> Option<f64> {
        self.pool
            .as_ref()
            .and_then(|pool| pool.fee_tier.as_ref())
            .and_then(NumericOrString::as_f64)
    }

    /// Returns the canonical [`PoolKey`] of the pool this position belongs to.
    #[must_use]
    pub fn pool_key(&self) -> PoolKey {
        PoolKey::new(
            self.token0_symbol(),
            self.token1_symbol(),
            &self.fee_tier_label(),
        )
    }

    /// Returns the lower tick of the range, if present and parseable.
    #[must_use]
    pub fn tick_lower(&self) -> Option<i32> {
        self.tick_lower
            .as_ref()
            .and_then(|boundary| boundary.tick_idx.as_ref())
            .and_then(NumericOrString::as_tick)
    }

    /// Returns the upper tick of the range, if present and parseable.
    #[must_use]
    pub fn tick_upper(&self) -> Option<i32> {
        self.tick_upper
            .as_ref()
            .and_then(|boundary| boundary.tick_idx.as_ref())
            .and_then(NumericOrString::as_tick)
    }

    /// Returns the current pool tick, if present and parseable.
    #[must_use]
    pub fn current_tick(&self) -> Option<i32> {
        self.pool
            .as_ref()
            .and_then(|pool| pool.tick.as_ref())
            .and_then(NumericOrString::as_tick)
    }

    /// Returns the position liquidity, contributing `0.0` when missing or unparseable.
    #[must_use]
    pub fn liquidity_value(&self) -> f64 {
        parse_or_default(self.liquidity.as_ref(), 0.0)
    }

    /// Returns the total USD value, contributing `0.0` when missing or unparseable.
    #[must_use]
    pub fn total_usd_value(&self) -> f64 {
        parse_or_default(
            self.usd_value
                .as_ref()
                .and_then(|value| value.total_value.as_ref()),
            0.0,
        )
    }

    /// Returns the USD price of token1, if present and parseable.
    #[must_use]
    pub fn token1_usd_price(&self) -> Option<f64> {
        self.usd_value
            .as_ref()
            .and_then(|value| value.token1_price.as_ref())
            .and_then(NumericOrString::as_f64)
    }

    /// Returns a `token0/token1` label for display.
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.token0_symbol(), self.token1_symbol())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::stubs::{position_eth_usdc, position_without_data};

    #[rstest]
    fn test_decode_camel_case_fields() {
        let json = r#"{
            "id": "pos-1",
            "token0": {"symbol": "ETH"},
            "token1": {"symbol": "USDC"},
            "pool": {"feeTier": "3000", "tick": 100, "token0Price": "2500.5", "token1Price": 0.0004},
            "tickLower": {"tickIdx": 0},
            "tickUpper": {"tickIdx": "200"},
            "token0Amount": "1.5",
            "token1Amount": 3000,
            "liquidity": "500",
            "usdValue": {"token0Value": 500, "token1Value": "500", "totalValue": "1000", "token1Price": "1"}
        }"#;
        let position: Position = serde_json::from_str(json).unwrap();

        assert_eq!(position.id, Some(PositionId::from("pos-1")));
        assert_eq!(position.pool_key().as_str(), "ETH-USDC-3000");
        assert_eq!(position.tick_lower(), Some(0));
        assert_eq!(position.tick_upper(), Some(200));
        assert_eq!(position.current_tick(), Some(100));
        assert_eq!(position.liquidity_value(), 500.0);
        assert_eq!(position.total_usd_value(), 1000.0);
        assert_eq!(position.token1_usd_price(), Some(1.0));
        assert_eq!(position.pair_label(), "ETH/USDC");
    }

    #[rstest]
    fn test_empty_object_uses_fallbacks(position_without_data: Position) {
        assert_eq!(position_without_data.token0_symbol(), TOKEN0_FALLBACK);
        assert_eq!(position_without_data.token1_symbol(), TOKEN1_FALLBACK);
        assert_eq!(position_without_data.fee_tier_label(), FEE_TIER_FALLBACK);
        assert_eq!(position_without_data.pool_key().as_str(), "Token0-Token1-0");
        assert_eq!(position_without_data.tick_lower(), None);
        assert_eq!(position_without_data.tick_upper(), None);
        assert_eq!(position_without_data.current_tick(), None);
        assert_eq!(position_without_data.liquidity_value(), 0.0);
        assert_eq!(position_without_data.total_usd_value(), 0.0);
        assert_eq!(position_without_data.fee_tier(), None);
    }

    #[rstest]
    fn test_empty_symbol_falls_back() {
        let position = Position {
            token0: Some(Token::new("")),
            token1: Some(Token { symbol: None }),
            ..Default::default()
        };
        assert_eq!(position.pool_key().as_str(), "Token0-Token1-0");
    }

    #[rstest]
    fn test_padded_labels_kept_verbatim() {
        let mut position = position_eth_usdc(0, 200, 100);
        position.token0 = Some(Token::new(" ETH"));
        position.pool.as_mut().unwrap().fee_tier = Some(NumericOrString::from("3000 "));

        assert_eq!(position.token0_symbol(), " ETH");
        assert_eq!(position.fee_tier_label(), "3000 ");
        assert_eq!(position.pool_key().as_str(), " ETH-USDC-3000 ");
    }

    #[rstest]
    fn test_numeric_fee_tier_label(mut position_eth_usdc: Position) {
        position_eth_usdc.pool.as_mut().unwrap().fee_tier = Some(NumericOrString::Number(500.0));
        assert_eq!(position_eth_usdc.fee_tier_label(), "500");
        assert_eq!(position_eth_usdc.pool_key().as_str(), "ETH-USDC-500");
    }

    #[rstest]
    fn test_unparseable_amounts_contribute_zero(mut position_eth_usdc: Position) {
        position_eth_usdc.liquidity = Some(NumericOrString::from("lots"));
        position_eth_usdc.usd_value = Some(UsdValue {
            total_value: Some(NumericOrString::from("NaN")),
            ..Default::default()
        });
        assert_eq!(position_eth_usdc.liquidity_value(), 0.0);
        assert_eq!(position_eth_usdc.total_usd_value(), 0.0);
    }

    #[rstest]
    fn test_tolerates_unexpected_types() {
        let json = r#"{"liquidity": true, "pool": {"tick": {"bad": 1}}, "tickLower": {"tickIdx": [1]}}"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.liquidity_value(), 0.0);
        assert_eq!(position.current_tick(), None);
        assert_eq!(position.tick_lower(), None);
    }
}
