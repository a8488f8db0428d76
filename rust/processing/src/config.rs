// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch configuration loaded from environment variables.

use std::path::PathBuf;

/// Default directory for mesh artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
/// Default directory for run logs.
pub const DEFAULT_LOG_DIR: &str = "./volumes";
/// Default mesh file extension.
pub const DEFAULT_MESH_EXTENSION: &str = "obj";
/// Default run log file name template.
pub const DEFAULT_LOG_TEMPLATE: &str = "volumes_*.txt";
/// Placeholder replaced by the run timestamp in the log template.
pub const DEFAULT_LOG_PLACEHOLDER: &str = "*";

/// Batch configuration.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the point files.
    pub input_dir: PathBuf,
    /// Directory receiving one mesh per processed point file.
    pub output_dir: PathBuf,
    /// Directory receiving the run log.
    pub log_dir: PathBuf,
    /// Extension of written mesh files (without the dot).
    pub mesh_extension: String,
    /// Run log file name template.
    pub log_template: String,
    /// Placeholder in `log_template` replaced by the run's Unix timestamp.
    pub log_placeholder: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.into())
}

impl BatchConfig {
    /// Configuration with default output locations.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            mesh_extension: DEFAULT_MESH_EXTENSION.into(),
            log_template: DEFAULT_LOG_TEMPLATE.into(),
            log_placeholder: DEFAULT_LOG_PLACEHOLDER.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `SURFVOL_OUTPUT_DIR` (default `./output`)
    /// - `SURFVOL_LOG_DIR` (default `./volumes`)
    /// - `SURFVOL_MESH_EXT` (default `obj`)
    /// - `SURFVOL_LOG_TEMPLATE` (default `volumes_*.txt`)
    ///
    /// Unset or blank variables fall back to their defaults.
    pub fn from_env(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: env_or("SURFVOL_OUTPUT_DIR", DEFAULT_OUTPUT_DIR).into(),
            log_dir: env_or("SURFVOL_LOG_DIR", DEFAULT_LOG_DIR).into(),
            mesh_extension: env_or("SURFVOL_MESH_EXT", DEFAULT_MESH_EXTENSION)
                .trim_start_matches('.')
                .to_string(),
            log_template: env_or("SURFVOL_LOG_TEMPLATE", DEFAULT_LOG_TEMPLATE),
            log_placeholder: DEFAULT_LOG_PLACEHOLDER.into(),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_mesh_extension(mut self, ext: impl Into<String>) -> Self {
        self.mesh_extension = ext.into();
        self
    }

    pub fn with_log_template(
        mut self,
        template: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        self.log_template = template.into();
        self.log_placeholder = placeholder.into();
        self
    }
}
