use crate::camera::connection::ConnectionConfig;
use crate::errors::{NetwaveError, NetwaveResult};
use log::{debug, error};
use reqwest::blocking::Client;
use std::time::Instant;

/// What came back from one GET, before any status interpretation.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Final URL including the encoded query string.
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes authenticated GET requests against a camera.
pub trait Transport {
    fn get(&self, url: &str, params: &[(&str, String)]) -> NetwaveResult<TransportResponse>;
}

/// Blocking reqwest transport with HTTP Basic credentials and a fixed timeout.
pub struct HttpTransport {
    client: Client,
    username: String,
    password: String,
}

impl HttpTransport {
    pub fn new(connection: &ConnectionConfig) -> NetwaveResult<Self> {
        let client = Client::builder()
            .timeout(connection.timeout())
            .build()
            .map_err(|e| NetwaveError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(HttpTransport {
            client,
            username: connection.username().to_string(),
            password: connection.password().to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, params: &[(&str, String)]) -> NetwaveResult<TransportResponse> {
        let start_time = Instant::now();
        let mut request = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password));
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().map_err(|e| {
            error!("HTTP GET {} failed after {:?}: {}", url, start_time.elapsed(), e);
            let resolved = e.url().map(|u| u.to_string()).unwrap_or_else(|| url.to_string());
            NetwaveError::Timeout { url: resolved, details: e.to_string() }
        })?;

        let resolved_url = response.url().to_string();
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| NetwaveError::Timeout {
            url: resolved_url.clone(),
            details: format!("failed to read response body: {}", e),
        })?;
        debug!(
            "HTTP GET {} -> {} ({} bytes) in {:?}",
            resolved_url,
            status,
            body.len(),
            start_time.elapsed()
        );
        Ok(TransportResponse { url: resolved_url, status, body: body.to_vec() })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub url: String,
        pub params: Vec<(String, String)>,
    }

    impl RecordedRequest {
        pub fn param(&self, key: &str) -> Option<&str> {
            self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
        }
    }

    /// Records every request and answers from a queue; answers 200 with an empty body once the
    /// queue is drained.
    #[derive(Default)]
    pub struct RecordingTransport {
        pub requests: RefCell<Vec<RecordedRequest>>,
        responses: RefCell<VecDeque<(u16, Vec<u8>)>>,
    }

    impl RecordingTransport {
        pub fn respond(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back((status, body.as_bytes().to_vec()));
        }

        pub fn respond_bytes(&self, status: u16, body: &[u8]) {
            self.responses.borrow_mut().push_back((status, body.to_vec()));
        }

        pub fn last(&self) -> Option<RecordedRequest> {
            self.requests.borrow().last().cloned()
        }

        pub fn count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for RecordingTransport {
        fn get(&self, url: &str, params: &[(&str, String)]) -> NetwaveResult<TransportResponse> {
            self.requests.borrow_mut().push(RecordedRequest {
                url: url.to_string(),
                params: params.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            });
            let (status, body) = self.responses.borrow_mut().pop_front().unwrap_or((200, Vec::new()));
            let query: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            let resolved = if query.is_empty() { url.to_string() } else { format!("{}?{}", url, query.join("&")) };
            Ok(TransportResponse { url: resolved, status, body })
        }
    }
}
