use std::fmt;
use std::time::Duration;

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to reach one camera. Fixed once a client is built.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    address: String,
    username: String,
    password: String,
    timeout: Duration,
}

impl ConnectionConfig {
    pub fn new(address: &str, username: &str, password: &str, timeout: Duration) -> Self {
        ConnectionConfig {
            address: normalize_address(address),
            username: username.to_string(),
            password: password.to_string(),
            timeout,
        }
    }

    /// Base address, always ending with `/`.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins a CGI path onto the base address.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.address, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    let mut normalized = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_gets_trailing_separator() {
        let cfg = ConnectionConfig::new("http://192.168.1.20:81", "admin", "", DEFAULT_TIMEOUT);
        assert_eq!(cfg.address(), "http://192.168.1.20:81/");

        let already = ConnectionConfig::new("http://192.168.1.20:81/", "admin", "", DEFAULT_TIMEOUT);
        assert_eq!(already.address(), "http://192.168.1.20:81/");
    }

    #[test]
    fn bare_host_defaults_to_http() {
        let cfg = ConnectionConfig::new("camera.local", "admin", "", DEFAULT_TIMEOUT);
        assert_eq!(cfg.address(), "http://camera.local/");
        assert_eq!(cfg.url_for("get_params.cgi"), "http://camera.local/get_params.cgi");
    }

    #[test]
    fn debug_output_hides_password() {
        let cfg = ConnectionConfig::new("http://cam", "admin", "hunter2", Duration::from_secs(3));
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("admin"));
    }
}
