//! 配置文件
//!
//! 配置文件位置（按优先级）：
//!     1. `$IPQ_CONFIG` 指定的路径
//!     2. `<config dir>/ipq/config.yaml`
//!     3. `~/.ipq.yaml`
//!
//! 配置优先级：命令行参数 > 环境变量 > 配置文件 > 默认值
//!
//! ```yaml
//! show_detail: true
//! timeout: 10s
//! color: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::parse_duration;

/// Values read from the config file. Absent keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show geolocation detail without `-d`
    pub show_detail: bool,
    /// Per-lookup timeout, e.g. `10s`
    pub timeout: Option<String>,
    /// `false` disables colors
    pub color: Option<bool>,
}

impl Config {
    /// Load the first config file found, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is logged and
    /// ignored.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring config file: {e:#}");
                Self::default()
            }
        }
    }

    /// Parse the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// First existing config path, if any.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os("IPQ_CONFIG").filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        let candidates = [
            dirs::config_dir().map(|dir| dir.join("ipq").join("config.yaml")),
            dirs::home_dir().map(|home| home.join(".ipq.yaml")),
        ];
        candidates.into_iter().flatten().find(|path| path.is_file())
    }

    /// Configured timeout; an unparsable value is logged and ignored.
    pub fn timeout(&self) -> Option<Duration> {
        let text = self.timeout.as_deref()?;
        match parse_duration(text) {
            Ok(timeout) => Some(timeout),
            Err(e) => {
                log::warn!("config timeout ignored: {e}");
                None
            }
        }
    }
}
