//! Weight fetcher implementation using reqwest.

use std::io::Write;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::WeightFetcher;

const USER_AGENT: &str = concat!("cvd-weights/", env!("CARGO_PKG_VERSION"));

/// Transport limits for weight downloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFetcherConfig {
    pub connect_timeout_secs: u64,
    /// Upper bound for a whole transfer; checkpoints can be hundreds of megabytes.
    pub timeout_secs: u64,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self { connect_timeout_secs: 30, timeout_secs: 3600 }
    }
}

/// HTTP transport for weight files.
///
/// One GET per call; the body is streamed into the caller's sink.
#[derive(Debug, Clone)]
pub struct HttpWeightFetcher {
    client: Client,
}

impl HttpWeightFetcher {
    pub fn new(config: &HttpFetcherConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl WeightFetcher for HttpWeightFetcher {
    fn fetch(&self, url: &Url, sink: &mut dyn Write) -> Result<u64, AppError> {
        let mut response =
            self.client.get(url.clone()).send().map_err(|e| AppError::Download {
                url: url.to_string(),
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            return Err(AppError::Download {
                url: url.to_string(),
                message: format!("HTTP {} {}", status.as_u16(), reason),
                status: Some(status.as_u16()),
            });
        }

        let written = response.copy_to(&mut *sink).map_err(|e| AppError::Download {
            url: url.to_string(),
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;
        sink.flush()?;

        debug!("fetched {} bytes from {}", written, url);
        Ok(written)
    }
}
