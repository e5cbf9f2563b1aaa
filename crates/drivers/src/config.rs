use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use showcase_application::{NavigationTiming, ShowcaseSettings};
use showcase_domain::BackgroundStrategy;

const MANIFEST_FILE: &str = "showcase.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub asset_root: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub window_width: usize,
    pub window_height: usize,
    pub wheel_cooldown_ms: u64,
    pub key_cooldown_ms: u64,
    pub swipe_threshold_px: f32,
    pub rotation_interval_ms: u64,
    pub crossfade_ms: u64,
    pub background_strategy: BackgroundStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("."),
            manifest_path: None,
            window_width: 1120,
            window_height: 700,
            wheel_cooldown_ms: 700,
            key_cooldown_ms: 50,
            swipe_threshold_px: 50.0,
            rotation_interval_ms: 5_000,
            crossfade_ms: 1_000,
            background_strategy: BackgroundStrategy::Race,
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .map_err(|error| format!("failed to read config {}: {error}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|error| format!("invalid config {}: {error}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err("window dimensions must be non-zero".to_string());
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err("swipe threshold must be a non-negative number".to_string());
        }
        if self.rotation_interval_ms == 0 {
            return Err("rotation interval must be non-zero".to_string());
        }
        Ok(())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| self.asset_root.join(MANIFEST_FILE))
    }

    pub fn settings(&self) -> ShowcaseSettings {
        ShowcaseSettings {
            asset_root: self.asset_root.clone(),
            background_strategy: self.background_strategy,
            timing: NavigationTiming {
                wheel_cooldown_ms: self.wheel_cooldown_ms,
                key_cooldown_ms: self.key_cooldown_ms,
            },
            rotation_interval_ms: self.rotation_interval_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_match_page_timings() {
        let config = AppConfig::default();
        assert_eq!(config.wheel_cooldown_ms, 700);
        assert_eq!(config.key_cooldown_ms, 50);
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.rotation_interval_ms, 5_000);
        assert_eq!(config.crossfade_ms, 1_000);
        assert_eq!(config.manifest_path(), PathBuf::from("./showcase.json"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "asset_root": "site", "background_strategy": "ordered", "key_cooldown_ms": 80 }"#,
        )
        .expect("write");

        let config = AppConfig::load(Some(&path)).expect("config");
        assert_eq!(config.asset_root, PathBuf::from("site"));
        assert_eq!(config.background_strategy, BackgroundStrategy::Ordered);
        assert_eq!(config.settings().timing.key_cooldown_ms, 80);
        assert_eq!(config.settings().timing.wheel_cooldown_ms, 700);
        assert_eq!(config.manifest_path(), PathBuf::from("site/showcase.json"));
    }

    #[test]
    fn rejects_zero_sized_window() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "window_width": 0 }"#).expect("write");
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
