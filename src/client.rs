use crate::error::Result;
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_VIDEO_URL: &str = "https://graph-video.facebook.com";

/// Transport configuration for Graph API requests
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for photo and feed requests
    pub graph_base_url: String,
    /// Base URL for video uploads
    pub video_base_url: String,
    /// Optional API version path segment, e.g. "v19.0"
    pub api_version: Option<String>,
    /// Total timeout for feed and URL-photo requests
    pub timeout: Duration,
    /// Total timeout for multipart uploads
    pub upload_timeout: Duration,
    /// Connect timeout for every request
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            graph_base_url: DEFAULT_GRAPH_URL.to_string(),
            video_base_url: DEFAULT_VIDEO_URL.to_string(),
            api_version: None,
            timeout: Duration::from_secs(60),
            upload_timeout: Duration::from_secs(600),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Point both graph and video requests at a single base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.graph_base_url = base_url.clone();
        self.video_base_url = base_url;
        self
    }

    /// Set the API version segment
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the upload timeout
    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }
}

/// Create the HTTP client for feed posts and URL photo uploads
pub fn create_graph_client(config: &Config) -> Result<Client> {
    Ok(ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?)
}

/// Create the HTTP client for multipart uploads with a longer timeout
pub fn create_upload_client(config: &Config) -> Result<Client> {
    Ok(ClientBuilder::new()
        .timeout(config.upload_timeout)
        .connect_timeout(config.connect_timeout)
        .build()?)
}
