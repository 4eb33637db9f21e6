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

//! Type stubs to facilitate testing.

use indexmap::IndexMap;
use poolscope_core::NumericOrString;
use rstest::fixture;

use crate::{
    identifiers::PositionId,
    position::{PoolState, Position, TickBoundary, Token, UsdValue},
    snapshot::PositionSnapshot,
};

/// Builds a fully populated position for tests.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn position_with(
    token0: &str,
    token1: &str,
    fee_tier: &str,
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
    liquidity: &str,
    total_value: &str,
) -> Position {
    Position {
        id: None,
        token0: Some(Token::new(token0)),
        token1: Some(Token::new(token1)),
        pool: Some(PoolState {
            fee_tier: Some(NumericOrString::from(fee_tier)),
            tick: Some(NumericOrString::from(current_tick)),
            token0_price: Some(NumericOrString::from("2500")),
            token1_price: Some(NumericOrString::from("0.0004")),
        }),
        tick_lower: Some(TickBoundary::new(tick_lower)),
        tick_upper: Some(TickBoundary::new(tick_upper)),
        token0_amount: Some(NumericOrString::from("0.2")),
        token1_amount: Some(NumericOrString::from("500")),
        liquidity: Some(NumericOrString::from(liquidity)),
        usd_value: Some(UsdValue {
            token0_value: None,
            token1_value: None,
            total_value: Some(NumericOrString::from(total_value)),
            token1_price: Some(NumericOrString::from("1")),
        }),
    }
}

#[fixture]
pub fn position_eth_usdc(
    #[default(0)] tick_lower: i32,
    #[default(200)] tick_upper: i32,
    #[default(100)] current_tick: i32,
) -> Position {
    let mut position = position_with(
        "ETH",
        "USDC",
        "3000",
        tick_lower,
        tick_upper,
        current_tick,
        "500",
        "1000",
    );
    position.id = Some(PositionId::from(1_u64));
    position
}

#[fixture]
pub fn position_without_data() -> Position {
    Position::default()
}

/// Two wallets sharing an ETH/USDC pool; `0xB` also holds a WBTC/ETH position.
#[fixture]
pub fn snapshot_two_wallets() -> PositionSnapshot {
    let mut positions = IndexMap::new();
    positions.insert(
        "0xA".to_string(),
        vec![
            position_with("ETH", "USDC", "3000", 0, 200, 100, "100", "400"),
            position_with("ETH", "USDC", "3000", -100, 100, 100, "250", "600"),
        ],
    );
    positions.insert(
        "0xB".to_string(),
        vec![
            position_with("WBTC", "ETH", "500", 10, 20, 15, "7", "70"),
            position_with("ETH", "USDC", "3000", 50, 150, 100, "50", "100"),
        ],
    );
    PositionSnapshot::from_positions(positions)
}

#[fixture]
pub fn snapshot_with_empty_wallet() -> PositionSnapshot {
    let mut positions = IndexMap::new();
    positions.insert(
        "0xA".to_string(),
        vec![position_with("ETH", "USDC", "3000", 0, 200, 100, "500", "1000")],
    );
    positions.insert("0xEMPTY".to_string(), Vec::new());
    PositionSnapshot::from_positions(positions)
}
