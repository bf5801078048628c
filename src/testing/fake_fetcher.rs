use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::WeightFetcher;

/// Serves canned bodies keyed by URL and records requests.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, Vec<u8>>,
    failures: HashMap<String, u16>,
    requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &[u8]) -> Self {
        self.bodies.insert(url.to_string(), body.to_vec());
        self
    }

    /// Write a partial body, then fail with `status`.
    pub fn with_failure(mut self, url: &str, status: u16) -> Self {
        self.failures.insert(url.to_string(), status);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl WeightFetcher for FakeFetcher {
    fn fetch(&self, url: &Url, sink: &mut dyn Write) -> Result<u64, AppError> {
        self.requested.lock().unwrap().push(url.to_string());

        if let Some(status) = self.failures.get(url.as_str()) {
            sink.write_all(b"partial")?;
            return Err(AppError::Download {
                url: url.to_string(),
                message: format!("HTTP {}", status),
                status: Some(*status),
            });
        }

        let body = self.bodies.get(url.as_str()).ok_or_else(|| AppError::Download {
            url: url.to_string(),
            message: "HTTP 404 Not Found".into(),
            status: Some(404),
        })?;
        sink.write_all(body)?;
        Ok(body.len() as u64)
    }
}
