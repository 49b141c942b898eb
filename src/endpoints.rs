use crate::client::Config;
use crate::error::{PostError, Result};
use url::Url;

/// Endpoint URLs for one page, derived once from the page identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub photos: Url,
    pub videos: Url,
    pub feed: Url,
}

impl Endpoints {
    /// Derive the endpoints for `page_id` from the configured base URLs
    pub fn new(config: &Config, page_id: &str) -> Result<Self> {
        let version = config.api_version.as_deref();
        Ok(Endpoints {
            photos: page_url(&config.graph_base_url, version, page_id, "photos")?,
            videos: page_url(&config.video_base_url, version, page_id, "videos")?,
            feed: page_url(&config.graph_base_url, version, page_id, "feed")?,
        })
    }
}

fn page_url(base: &str, version: Option<&str>, page_id: &str, edge: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| PostError::Config(format!("cannot use {} as a base URL", base)))?;
        segments.pop_if_empty();
        if let Some(version) = version {
            segments.push(version);
        }
        segments.push(page_id).push(edge);
    }
    Ok(url)
}
