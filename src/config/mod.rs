// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Missing fields in
//! an existing file fall back to their defaults, and the backend address can
//! be overridden per run with the `PANPUP_BACKEND` environment variable.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "panpup";

const BACKEND_ENV_VAR: &str = "PANPUP_BACKEND";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,

    /// Base address of the parse/download backend.
    pub(crate) backend_url: String,

    /// Per-request timeout, unset means wait for the backend indefinitely.
    pub(crate) request_timeout_secs: Option<u64>,

    pub(crate) status_dismiss_secs: u64,
    pub(crate) auto_parse_delay_ms: u64,
    pub(crate) clipboard_delay_ms: u64,

    /// Re-read the clipboard whenever the terminal regains focus.
    pub(crate) clipboard_on_focus: bool,

    pub(crate) log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            backend_url: "http://localhost:3000".to_string(),
            request_timeout_secs: None,
            status_dismiss_secs: 4,
            auto_parse_delay_ms: 500,
            clipboard_delay_ms: 500,
            clipboard_on_focus: true,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn status_dismiss(&self) -> Duration {
        Duration::from_secs(self.status_dismiss_secs)
    }

    pub(crate) fn auto_parse_delay(&self) -> Duration {
        Duration::from_millis(self.auto_parse_delay_ms)
    }

    pub(crate) fn clipboard_delay(&self) -> Duration {
        Duration::from_millis(self.clipboard_delay_ms)
    }

    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// The directory log files are written to.
    ///
    /// Defaults to the directory holding the configuration file, or the
    /// system temporary directory when that cannot be determined.
    pub(crate) fn resolved_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| env::temp_dir().join(CONFIG_NAME))
    }

    fn apply_overrides(mut self, backend_override: Option<String>) -> Self {
        if let Some(url) = backend_override.filter(|u| !u.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        self
    }
}

/// Loads the configuration, writing a default file on first run. Unreadable
/// files fall back to the defaults.
pub(crate) fn load_config() -> AppConfig {
    let config = match confy::get_configuration_file_path(CONFIG_NAME, None) {
        Ok(path) => load_config_from(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    config.apply_overrides(env::var(BACKEND_ENV_VAR).ok())
}

fn load_config_from(path: &Path) -> Result<AppConfig, confy::ConfyError> {
    confy::load_path(path)
}
