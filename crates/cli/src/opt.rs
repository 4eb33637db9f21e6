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

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Main CLI structure for parsing command-line arguments and options.
///
/// This is the entry point for the poolscope command-line interface, running analytics passes
/// over a position snapshot and printing the results as JSON.
#[derive(Debug, Parser)]
#[clap(version, about, author)]
pub struct PoolscopeCli {
    /// Path to a TOML analysis configuration file.
    #[arg(long, global = true, env = "POOLSCOPE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Maximum log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, env = "POOLSCOPE_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available top-level commands for the poolscope CLI.
#[derive(Parser, Debug)]
pub enum Commands {
    /// Aggregates positions per pool, sorted by miner count.
    Pools(SnapshotOpt),
    /// Prints snapshot-wide totals.
    Summary(SnapshotOpt),
    /// Lists addresses holding at least one position.
    Addresses(SnapshotOpt),
    /// Analyzes every position of a single wallet.
    Position(PositionOpt),
}

/// Location of the position snapshot to analyze.
#[derive(Parser, Debug, Clone)]
pub struct SnapshotOpt {
    /// Path to the snapshot JSON file.
    #[arg(long)]
    pub snapshot: PathBuf,
}

/// Options for analyzing the positions of a single wallet.
#[derive(Parser, Debug, Clone)]
#[command(about = "Position range analysis", long_about = None)]
pub struct PositionOpt {
    #[clap(flatten)]
    pub snapshot: SnapshotOpt,
    /// Wallet address whose positions are analyzed.
    #[arg(long)]
    pub address: String,
    #[clap(flatten)]
    pub overrides: AnalysisOverrides,
}

/// Overrides applied on top of the loaded analysis configuration.
#[derive(Parser, Debug, Clone, Default)]
pub struct AnalysisOverrides {
    /// Lower threshold as a percentage of the tick range.
    #[arg(long, allow_negative_numbers = true)]
    pub low_percent: Option<f64>,
    /// Upper threshold as a percentage of the tick range.
    #[arg(long, allow_negative_numbers = true)]
    pub high_percent: Option<f64>,
    /// Proximity to a threshold, in ticks, that raises a danger alert.
    #[arg(long, allow_negative_numbers = true)]
    pub tolerance: Option<i64>,
    /// Number of steps the sampled tick domain is divided into.
    #[arg(long)]
    pub resolution: Option<usize>,
    /// Omit the sampled tick series from position reports.
    #[arg(long)]
    pub no_samples: bool,
}
