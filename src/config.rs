use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10 * 60;

/// Lower bound on changeset dates requested from the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FromDate {
    Days(u32),
    AllTime,
}

impl FromDate {
    pub const PRESETS: [FromDate; 7] = [
        FromDate::Days(7),
        FromDate::Days(15),
        FromDate::Days(30),
        FromDate::Days(91),
        FromDate::Days(182),
        FromDate::Days(365),
        FromDate::AllTime,
    ];

    /// Cut-off relative to `now`, or `None` for all time. A day count
    /// reaching past the representable range also means all time.
    pub fn cutoff(self, now: time::OffsetDateTime) -> Option<time::OffsetDateTime> {
        let FromDate::Days(days) = self else {
            return None;
        };
        let cutoff = now.checked_sub(time::Duration::days(i64::from(days)));
        if cutoff.is_none() {
            log::warn!("from-date of {} days is out of range, listing all time", days);
        }
        cutoff
    }
}

impl Default for FromDate {
    fn default() -> Self {
        FromDate::Days(30)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub version: u32,

    /// Automatic refresh period of the changeset list.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    #[serde(default)]
    pub from_date: FromDate,

    /// Drop list completions superseded by a newer request, and read-only
    /// completions issued against a replaced provider. When false the last
    /// completion to arrive wins.
    #[serde(default = "default_true")]
    pub discard_stale_completions: bool,
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_true() -> bool {
    true
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            version: 1,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            from_date: FromDate::default(),
            discard_stale_completions: true,
        }
    }
}

impl PanelConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes =
            fs::read(path).with_context(|| format!("read panel config {}", path.display()))?;
        let cfg: PanelConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse panel config {}", path.display()))?;
        Ok(cfg)
    }

    /// Stages the JSON next to `path` and renames it over the old file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self).context("serialize panel config")?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create config directory {}", dir.display()))?;
        }
        let staged = path.with_extension("json.partial");
        fs::write(&staged, &bytes)
            .with_context(|| format!("stage panel config {}", staged.display()))?;
        fs::rename(&staged, path)
            .with_context(|| format!("replace panel config {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
