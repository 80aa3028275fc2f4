use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::model::timeframe::Timeframe;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub csv_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_display_count")]
    pub display_count: usize,
    #[serde(default = "default_timeframe_index")]
    pub default_timeframe_index: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            display_count: default_display_count(),
            default_timeframe_index: default_timeframe_index(),
        }
    }
}

fn default_display_count() -> usize {
    60
}

// 15M
fn default_timeframe_index() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config/default.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chart.display_count == 0 {
            bail!("chart.display_count must be > 0");
        }
        if Timeframe::from_index(self.chart.default_timeframe_index).is_none() {
            bail!(
                "chart.default_timeframe_index must be in 0..{}",
                Timeframe::ALL.len()
            );
        }
        Ok(())
    }

    pub fn default_timeframe(&self) -> Timeframe {
        Timeframe::from_index(self.chart.default_timeframe_index).unwrap_or(Timeframe::M15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[data]
csv_path = "data/DAT_MT_XAUUSD_M1_2021.csv"

[chart]
display_count = 90
default_timeframe_index = 4

[ui]
refresh_rate_ms = 50

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.csv_path, "data/DAT_MT_XAUUSD_M1_2021.csv");
        assert_eq!(config.chart.display_count, 90);
        assert_eq!(config.default_timeframe(), Timeframe::H1);
        assert_eq!(config.ui.refresh_rate_ms, 50);
        assert_eq!(config.logging.level, "debug");
        config.validate().unwrap();
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[data]\ncsv_path = \"x.csv\"\n").unwrap();
        assert_eq!(config.chart.display_count, 60);
        assert_eq!(config.default_timeframe(), Timeframe::M15);
        assert_eq!(config.ui.refresh_rate_ms, 100);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn rejects_zero_display_count() {
        let config: Config =
            toml::from_str("[data]\ncsv_path = \"x.csv\"\n[chart]\ndisplay_count = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_timeframe_index() {
        let config: Config = toml::from_str(
            "[data]\ncsv_path = \"x.csv\"\n[chart]\ndefault_timeframe_index = 8\n",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
