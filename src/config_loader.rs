use crate::app_config::ApplicationConfig;
use crate::camera_config::CameraConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub const DEFAULT_CONFIG_PATH: &str = "netwave.yaml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
    #[serde(default)]
    pub cameras: Vec<CameraConfig>,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'", path))?;

    let config = parse_config(&config_str)
        .with_context(|| format!("Invalid configuration in '{}'", path))?;

    info!("✅ Loaded configuration from '{}' in {:?}", path, start_time.elapsed());
    Ok(config)
}

/// Loads `explicit_path` if given, else the default file if it exists, else built-in defaults.
pub fn load_config_or_default(explicit_path: Option<&str>) -> Result<MasterConfig> {
    match explicit_path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            debug!("No configuration file found, using defaults.");
            Ok(MasterConfig::default())
        }
    }
}

pub fn parse_config(config_str: &str) -> Result<MasterConfig> {
    let config: MasterConfig = serde_yaml::from_str(config_str)
        .context("Failed to parse YAML configuration")?;
    validate_master_config(&config).context("Master configuration validation failed")?;
    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    if config.app_settings.default_timeout_seconds == 0 {
        bail!("Application default_timeout_seconds must be greater than zero.");
    }
    if config.app_settings.default_username.is_empty() {
        bail!("Application default_username cannot be empty.");
    }
    if config.app_settings.snapshot_directory.is_empty() {
        bail!("Application snapshot_directory cannot be empty.");
    }

    let mut camera_names = HashSet::new();
    for (idx, camera) in config.cameras.iter().enumerate() {
        if camera.name.is_empty() {
            bail!("Camera name cannot be empty for camera #{}.", idx + 1);
        }
        if !camera_names.insert(&camera.name) {
            bail!("Duplicate camera name found: {}", camera.name);
        }
        if camera.address.is_empty() {
            bail!("Address for camera '{}' cannot be empty.", camera.name);
        }
        let with_scheme = if camera.address.contains("://") {
            camera.address.clone()
        } else {
            format!("http://{}", camera.address)
        };
        if Url::parse(&with_scheme).is_err() {
            bail!("Invalid address '{}' for camera '{}'.", camera.address, camera.name);
        }
        if matches!(camera.username.as_deref(), Some("")) {
            bail!("Username for camera '{}' cannot be empty.", camera.name);
        }
        if camera.timeout_seconds == Some(0) {
            bail!("Timeout for camera '{}' must be greater than zero.", camera.name);
        }
        debug!("Camera '{}' validated successfully.", camera.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
application:
  log_level: debug
  default_timeout_seconds: 3
cameras:
  - name: porch
    address: http://192.168.1.20:81
    username: viewer
  - name: garage
    address: 192.168.1.21
    timeout_seconds: 10
"#;

    #[test]
    fn parses_sample_with_defaults_filled_in() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.app_settings.log_level.as_deref(), Some("debug"));
        assert_eq!(config.app_settings.default_timeout_seconds, 3);
        assert_eq!(config.app_settings.default_username, "admin");
        assert_eq!(config.app_settings.snapshot_directory, "./snapshots");
        assert_eq!(config.cameras.len(), 2);
        assert_eq!(config.cameras[1].username, None);
        assert_eq!(config.cameras[1].timeout_seconds, Some(10));
    }

    #[test]
    fn empty_document_sections_are_optional() {
        let config = parse_config("cameras: []").unwrap();
        assert!(config.cameras.is_empty());
        assert_eq!(config.app_settings.default_timeout_seconds, 5);
    }

    #[test]
    fn rejects_duplicate_names() {
        let yaml = "cameras:\n  - name: a\n    address: 10.0.0.1\n  - name: a\n    address: 10.0.0.2\n";
        let err = parse_config(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate camera name"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_config("cameras:\n  - name: a\n    address: ''\n").is_err());
        assert!(parse_config("cameras:\n  - name: a\n    address: 'http://'\n").is_err());
        assert!(parse_config("cameras:\n  - name: a\n    address: 10.0.0.1\n    timeout_seconds: 0\n").is_err());
        assert!(parse_config("application:\n  default_timeout_seconds: 0\n").is_err());
    }

    #[test]
    fn loads_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("netwave.yaml");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.cameras[0].name, "porch");
        assert!(load_config(tmp.path().join("missing.yaml").to_str().unwrap()).is_err());
    }
}
