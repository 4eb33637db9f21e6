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

//! Command-line interface for the poolscope position analytics engine.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

mod commands;
pub mod opt;

use std::io::Write;

use crate::{
    commands::{load_config, run_addresses, run_pools, run_position, run_summary},
    opt::{Commands, PoolscopeCli},
};

/// Runs the parsed command, printing its JSON output to stdout.
///
/// # Errors
///
/// Returns an error if the configuration or snapshot cannot be loaded, or the output cannot be
/// written.
pub fn run(opt: PoolscopeCli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    execute(opt, &mut stdout.lock())
}

/// Runs the parsed command, writing its JSON output to `out`.
///
/// # Errors
///
/// Returns an error if the configuration or snapshot cannot be loaded, or the output cannot be
/// written.
pub fn execute<W: Write>(opt: PoolscopeCli, out: &mut W) -> anyhow::Result<()> {
    match opt.command {
        Commands::Pools(snapshot_opt) => run_pools(&snapshot_opt, out)?,
        Commands::Summary(snapshot_opt) => run_summary(&snapshot_opt, out)?,
        Commands::Addresses(snapshot_opt) => run_addresses(&snapshot_opt, out)?,
        Commands::Position(position_opt) => {
            let config = load_config(opt.config.as_deref())?;
            run_position(&position_opt, config, out)?;
        }
    }
    Ok(())
}
