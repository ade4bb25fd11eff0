use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    pub name: String,
    pub address: String, // e.g., http://192.168.1.20:81
    pub username: Option<String>,
    // Password is read from the <NAME>_PASSWORD environment variable, never stored here.
    pub timeout_seconds: Option<u64>,
}

impl CameraConfig {
    pub fn password_env_var(&self) -> String {
        format!("{}_PASSWORD", self.name.to_uppercase().replace('-', "_"))
    }
}
