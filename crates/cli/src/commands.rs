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

use std::{io::Write, path::Path};

use anyhow::Context;
use poolscope_analysis::{AnalysisConfig, aggregate_pools, analyze_positions, summarize};
use poolscope_model::PositionSnapshot;
use serde::Serialize;

use crate::opt::{AnalysisOverrides, PositionOpt, SnapshotOpt};

pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(AnalysisConfig::default()),
    }
}

fn load_snapshot(opt: &SnapshotOpt) -> anyhow::Result<PositionSnapshot> {
    let snapshot = PositionSnapshot::from_json_file(&opt.snapshot).with_context(|| {
        format!("Failed to load snapshot from {}", opt.snapshot.display())
    })?;
    log::info!(
        "Loaded {} positions across {} addresses",
        snapshot.position_count(),
        snapshot.positions.len()
    );
    Ok(snapshot)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn apply_overrides(mut config: AnalysisConfig, overrides: &AnalysisOverrides) -> AnalysisConfig {
    if let Some(low_percent) = overrides.low_percent {
        config.low_percent = low_percent;
    }
    if let Some(high_percent) = overrides.high_percent {
        config.high_percent = high_percent;
    }
    if let Some(tolerance) = overrides.tolerance {
        config.danger_tolerance = tolerance;
    }
    if let Some(resolution) = overrides.resolution {
        config.resolution_budget = resolution;
    }
    if overrides.no_samples {
        config.include_samples = false;
    }
    config
}

pub(crate) fn run_pools<W: Write>(opt: &SnapshotOpt, out: &mut W) -> anyhow::Result<()> {
    let snapshot = load_snapshot(opt)?;
    let pools = aggregate_pools(&snapshot.positions);
    log::info!("Aggregated {} pools", pools.len());
    write_json(out, &pools)
}

pub(crate) fn run_summary<W: Write>(opt: &SnapshotOpt, out: &mut W) -> anyhow::Result<()> {
    let snapshot = load_snapshot(opt)?;
    write_json(out, &summarize(&snapshot))
}

pub(crate) fn run_addresses<W: Write>(opt: &SnapshotOpt, out: &mut W) -> anyhow::Result<()> {
    let snapshot = load_snapshot(opt)?;
    write_json(out, &snapshot.addresses_with_positions())
}

pub(crate) fn run_position<W: Write>(
    opt: &PositionOpt,
    config: AnalysisConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let config = apply_overrides(config, &opt.overrides);
    config.validate().context("Invalid analysis configuration")?;
    log::debug!("Analysis config: {config:?}");

    let snapshot = load_snapshot(&opt.snapshot)?;
    let reports = analyze_positions(&opt.address, &snapshot, &config)?;

    let dangerous = reports.iter().filter(|r| r.danger.is_dangerous).count();
    if dangerous > 0 {
        log::warn!(
            "{dangerous} of {} positions for {} are near a range threshold",
            reports.len(),
            opt.address
        );
    }

    write_json(out, &reports)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};
    use tempfile::NamedTempFile;

    use super::*;
    use crate::{execute, opt::PoolscopeCli};

    const SNAPSHOT: &str = r#"{
        "positions": {
            "0xA": [
                {
                    "id": "1",
                    "token0": {"symbol": "ETH"},
                    "token1": {"symbol": "USDC"},
                    "pool": {"feeTier": "3000", "tick": 100},
                    "tickLower": {"tickIdx": 0},
                    "tickUpper": {"tickIdx": 200},
                    "liquidity": "500",
                    "usdValue": {"totalValue": "1000", "token1Price": "1"}
                }
            ],
            "0xEMPTY": []
        }
    }"#;

    #[fixture]
    fn snapshot_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        file
    }

    fn run_cli(args: &[&str]) -> anyhow::Result<Value> {
        let opt = PoolscopeCli::try_parse_from(args)?;
        let mut out = Vec::new();
        execute(opt, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[rstest]
    fn test_pools(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let value = run_cli(&["poolscope", "pools", "--snapshot", path]).unwrap();

        assert_eq!(value[0]["poolKey"], json!("ETH-USDC-3000"));
        assert_eq!(value[0]["minerCount"], json!(1));
        assert_eq!(value[0]["totalUSDValue"], json!(1000.0));
    }

    #[rstest]
    fn test_summary(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let value = run_cli(&["poolscope", "summary", "--snapshot", path]).unwrap();

        assert_eq!(value["totalAddresses"], json!(1));
        assert_eq!(value["totalPools"], json!(1));
        assert_eq!(value["totalLiquidity"], json!(500.0));
    }

    #[rstest]
    fn test_addresses(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let value = run_cli(&["poolscope", "addresses", "--snapshot", path]).unwrap();

        assert_eq!(value, json!(["0xA"]));
    }

    #[rstest]
    fn test_position(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let value = run_cli(&[
            "poolscope",
            "position",
            "--snapshot",
            path,
            "--address",
            "0xA",
        ])
        .unwrap();

        let report = &value[0];
        assert_eq!(report["id"], json!("1"));
        assert_eq!(report["pair"], json!("ETH/USDC"));
        assert_eq!(report["thresholds"]["lowThreshold"], json!(20));
        assert_eq!(report["danger"]["isDangerous"], json!(false));
        assert_eq!(report["samples"].as_array().map(Vec::len), Some(201));
    }

    #[rstest]
    fn test_position_overrides(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let value = run_cli(&[
            "poolscope",
            "position",
            "--snapshot",
            path,
            "--address",
            "0xA",
            "--low-percent",
            "45",
            "--tolerance",
            "10",
            "--no-samples",
        ])
        .unwrap();

        let report = &value[0];
        assert_eq!(report["thresholds"]["lowThreshold"], json!(90));
        assert_eq!(report["danger"]["nearLow"], json!(true));
        assert!(report.get("samples").is_none());
    }

    #[rstest]
    fn test_position_with_config_file(snapshot_file: NamedTempFile) {
        let mut config_file = NamedTempFile::new().unwrap();
        writeln!(config_file, "high_percent = 50.0").unwrap();
        writeln!(config_file, "include_samples = false").unwrap();

        let path = snapshot_file.path().to_str().unwrap();
        let config_path = config_file.path().to_str().unwrap();
        let value = run_cli(&[
            "poolscope",
            "--config",
            config_path,
            "position",
            "--snapshot",
            path,
            "--address",
            "0xA",
        ])
        .unwrap();

        assert_eq!(value[0]["thresholds"]["highThreshold"], json!(100));
        assert_eq!(value[0]["danger"]["nearHigh"], json!(true));
        assert!(value[0].get("samples").is_none());
    }

    #[rstest]
    #[case("pools")]
    #[case("summary")]
    #[case("addresses")]
    fn test_snapshot_commands_ignore_config(
        snapshot_file: NamedTempFile,
        #[case] command: &str,
    ) {
        let path = snapshot_file.path().to_str().unwrap();
        let result = run_cli(&[
            "poolscope",
            "--config",
            "/nonexistent/poolscope.toml",
            command,
            "--snapshot",
            path,
        ]);

        assert!(result.is_ok());
    }

    #[rstest]
    fn test_position_missing_config_fails(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let err = run_cli(&[
            "poolscope",
            "--config",
            "/nonexistent/poolscope.toml",
            "position",
            "--snapshot",
            path,
            "--address",
            "0xA",
        ])
        .unwrap_err();

        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[rstest]
    fn test_position_rejects_oversized_resolution(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let err = run_cli(&[
            "poolscope",
            "position",
            "--snapshot",
            path,
            "--address",
            "0xA",
            "--resolution",
            "18446744073709551615",
        ])
        .unwrap_err();

        assert_eq!(err.to_string(), "Invalid analysis configuration");
    }

    #[rstest]
    fn test_position_empty_wallet_fails(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let err = run_cli(&[
            "poolscope",
            "position",
            "--snapshot",
            path,
            "--address",
            "0xEMPTY",
        ])
        .unwrap_err();

        assert!(err.to_string().contains("No positions found"));
    }

    #[rstest]
    fn test_position_rejects_negative_tolerance(snapshot_file: NamedTempFile) {
        let path = snapshot_file.path().to_str().unwrap();
        let err = run_cli(&[
            "poolscope",
            "position",
            "--snapshot",
            path,
            "--address",
            "0xA",
            "--tolerance",
            "-1",
        ])
        .unwrap_err();

        assert_eq!(err.to_string(), "Invalid analysis configuration");
    }

    #[rstest]
    fn test_missing_snapshot_fails() {
        let err = run_cli(&["poolscope", "pools", "--snapshot", "/nonexistent/snapshot.json"])
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to load snapshot"));
    }

    #[rstest]
    fn test_apply_overrides_keeps_unset_values() {
        let config = apply_overrides(AnalysisConfig::default(), &AnalysisOverrides {
            resolution: Some(10),
            ..Default::default()
        });

        assert_eq!(config.resolution_budget, 10);
        assert_eq!(config.low_percent, 10.0);
        assert_eq!(config.danger_tolerance, 50);
        assert!(config.include_samples);
    }

    #[rstest]
    fn test_log_level_flag() {
        let opt = PoolscopeCli::try_parse_from([
            "poolscope",
            "--log-level",
            "debug",
            "addresses",
            "--snapshot",
            "snapshot.json",
        ])
        .unwrap();

        assert_eq!(opt.log_level, log::LevelFilter::Debug);
    }
}
