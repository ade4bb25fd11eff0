use crate::app_config::ApplicationConfig;
use crate::camera::connection::ConnectionConfig;
use crate::camera_config::CameraConfig;
use crate::config_loader::MasterConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::env;
use std::time::{Duration, Instant};

/// Connection parameters given directly on the command line.
#[derive(Debug, Clone, Default)]
pub struct DirectTarget {
    pub address: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Named cameras from the configuration file.
pub struct CameraManager {
    cameras: HashMap<String, CameraConfig>,
    app_settings: ApplicationConfig,
}

impl CameraManager {
    pub fn new(master_config: &MasterConfig) -> Result<Self> {
        debug!("🛠️ Initializing CameraManager...");
        let start_time = Instant::now();
        let mut cameras = HashMap::new();
        for cam_config in &master_config.cameras {
            if cameras.contains_key(&cam_config.name) {
                bail!("Duplicate camera name found in configuration: {}", cam_config.name);
            }
            cameras.insert(cam_config.name.clone(), cam_config.clone());
        }
        info!("✅ CameraManager initialized with {} cameras in {:?}.", cameras.len(), start_time.elapsed());
        Ok(CameraManager {
            cameras,
            app_settings: master_config.app_settings.clone(),
        })
    }

    pub fn camera_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cameras.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Connection for a configured camera. CLI overrides win over the file.
    pub fn connection_for(&self, name: &str, overrides: &DirectTarget) -> Result<ConnectionConfig> {
        let camera = self.cameras.get(name).with_context(|| {
            format!("Camera '{}' is not configured (known: {:?})", name, self.camera_names())
        })?;

        let password = match overrides.password.clone() {
            Some(p) => p,
            None => load_password(camera),
        };
        let username = overrides
            .username
            .clone()
            .or_else(|| camera.username.clone())
            .unwrap_or_else(|| self.app_settings.default_username.clone());
        let timeout = overrides
            .timeout_seconds
            .or(camera.timeout_seconds)
            .unwrap_or(self.app_settings.default_timeout_seconds);

        debug!("📷 Resolved configured camera '{}' at {}", name, camera.address);
        Ok(ConnectionConfig::new(&camera.address, &username, &password, Duration::from_secs(timeout)))
    }

    /// Connection built purely from CLI arguments.
    pub fn direct_connection(&self, target: &DirectTarget) -> Result<ConnectionConfig> {
        let address = match target.address.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => bail!("A camera ADDRESS or --camera NAME is required"),
        };
        let username = target.username.clone().unwrap_or_else(|| self.app_settings.default_username.clone());
        let password = target.password.clone().unwrap_or_default();
        let timeout = target.timeout_seconds.unwrap_or(self.app_settings.default_timeout_seconds);
        if timeout == 0 {
            bail!("Timeout must be greater than zero seconds");
        }
        Ok(ConnectionConfig::new(address, &username, &password, Duration::from_secs(timeout)))
    }
}

fn load_password(camera: &CameraConfig) -> String {
    let env_var_name = camera.password_env_var();
    match env::var(&env_var_name) {
        Ok(pass) => pass,
        Err(_) => {
            warn!(
                "Password not found in environment variable '{}' for camera '{}', using an empty password",
                env_var_name, camera.name
            );
            String::new()
        }
    }
}
