use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::Deserialize;
use tongshu::DayBoundary;
use tracing::debug;

/// Default configuration file, read from the working directory if present.
pub const DEFAULT_PATH: &str = "tongshu.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TongshuConfig {
    /// Offset from UTC used to decide what "today" and "now" are.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Whether the late zi hour belongs to the next day.
    #[serde(default)]
    pub day_boundary: DayBoundary,

    /// Look-ahead window for `deity upcoming`.
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,
}

fn default_utc_offset_minutes() -> i32 {
    480
}
fn default_upcoming_days() -> u32 {
    7
}

impl Default for TongshuConfig {
    fn default() -> Self {
        TongshuConfig {
            utc_offset_minutes: default_utc_offset_minutes(),
            day_boundary: DayBoundary::default(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

impl TongshuConfig {
    /// Loads the configuration.
    ///
    /// With no explicit path, a missing `tongshu.toml` yields the defaults; an
    /// explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_PATH), false),
        };
        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: TongshuConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        config.offset()?;
        debug!(?config, "config loaded");
        Ok(config)
    }

    /// The configured UTC offset.
    pub fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).with_context(|| {
            format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: TongshuConfig = toml::from_str("").unwrap();
        assert_eq!(TongshuConfig::default(), config);
        assert_eq!(480, config.utc_offset_minutes);
        assert_eq!(DayBoundary::ZiHour, config.day_boundary);
        assert_eq!(7, config.upcoming_days);
    }

    #[test]
    fn fields_override_defaults() {
        let config: TongshuConfig = toml::from_str(
            "utc_offset_minutes = -300\nday_boundary = \"midnight\"\nupcoming_days = 30\n",
        )
        .unwrap();
        assert_eq!(-300, config.utc_offset_minutes);
        assert_eq!(DayBoundary::Midnight, config.day_boundary);
        assert_eq!(30, config.upcoming_days);
        assert_eq!(-5 * 3600, config.offset().unwrap().local_minus_utc());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<TongshuConfig>("timezone = \"Asia/Taipei\"").is_err());
        assert!(toml::from_str::<TongshuConfig>("day_boundary = \"noon\"").is_err());
    }

    #[test]
    fn offset_range_is_checked() {
        let config = TongshuConfig {
            utc_offset_minutes: 24 * 60,
            ..TongshuConfig::default()
        };
        assert!(config.offset().is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/tongshu.toml");
        assert!(TongshuConfig::load(Some(path)).is_err());
    }
}
