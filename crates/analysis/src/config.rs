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

//! Configuration for analysis passes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    danger::DEFAULT_DANGER_TOLERANCE,
    sampler::DEFAULT_RESOLUTION_BUDGET,
    thresholds::{DEFAULT_HIGH_PERCENT, DEFAULT_LOW_PERCENT},
};

/// Largest accepted [`AnalysisConfig::resolution_budget`].
pub const MAX_RESOLUTION_BUDGET: usize = 100_000;

/// Errors raised while loading or validating an [`AnalysisConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid `resolution_budget`: must be positive")]
    ZeroResolutionBudget,
    #[error("Invalid `resolution_budget`: {0} exceeds the maximum of {max}", max = MAX_RESOLUTION_BUDGET)]
    ResolutionBudgetTooLarge(usize),
    #[error("Invalid `danger_tolerance`: {0} must be non-negative")]
    NegativeTolerance(i64),
    #[error("Invalid `{field}`: {value} is not finite")]
    NonFinitePercent { field: &'static str, value: f64 },
}

/// Configuration for position analysis passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// The number of steps the sampled tick domain is divided into.
    #[serde(default = "default_resolution_budget")]
    pub resolution_budget: usize,
    /// The lower threshold as a percentage of the tick range.
    #[serde(default = "default_low_percent")]
    pub low_percent: f64,
    /// The upper threshold as a percentage of the tick range.
    #[serde(default = "default_high_percent")]
    pub high_percent: f64,
    /// The absolute proximity, in ticks, at which a threshold is considered near.
    #[serde(default = "default_danger_tolerance")]
    pub danger_tolerance: i64,
    /// If position reports should carry the sampled tick series.
    #[serde(default = "default_true")]
    pub include_samples: bool,
}

const fn default_resolution_budget() -> usize {
    DEFAULT_RESOLUTION_BUDGET
}

const fn default_low_percent() -> f64 {
    DEFAULT_LOW_PERCENT
}

const fn default_high_percent() -> f64 {
    DEFAULT_HIGH_PERCENT
}

const fn default_danger_tolerance() -> i64 {
    DEFAULT_DANGER_TOLERANCE
}

const fn default_true() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            resolution_budget: DEFAULT_RESOLUTION_BUDGET,
            low_percent: DEFAULT_LOW_PERCENT,
            high_percent: DEFAULT_HIGH_PERCENT,
            danger_tolerance: DEFAULT_DANGER_TOLERANCE,
            include_samples: true,
        }
    }
}

impl AnalysisConfig {
    /// Parses a configuration from TOML, taking defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns an error if `toml` is malformed or contains unknown fields.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content cannot be parsed.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Checks the configuration is usable for an analysis pass.
    ///
    /// The analysis functions tolerate any values; this is for rejecting operator mistakes at
    /// the boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution budget is zero or above [`MAX_RESOLUTION_BUDGET`], the
    /// tolerance is negative, or either percentage is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution_budget == 0 {
            return Err(ConfigError::ZeroResolutionBudget);
        }
        if self.resolution_budget > MAX_RESOLUTION_BUDGET {
            return Err(ConfigError::ResolutionBudgetTooLarge(
                self.resolution_budget,
            ));
        }
        if self.danger_tolerance < 0 {
            return Err(ConfigError::NegativeTolerance(self.danger_tolerance));
        }
        for (field, value) in [
            ("low_percent", self.low_percent),
            ("high_percent", self.high_percent),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinitePercent { field, value });
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
