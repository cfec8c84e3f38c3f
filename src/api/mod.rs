//! Item API Client
//!
//! HTTP bindings to the external item store, organized by resource.

mod error;
mod item;

pub use error::*;

use reqwest::Url;

use crate::config::Config;

/// Cheap to clone; shared through Leptos context
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// `{base}/{segments...}` with every segment percent-encoded
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
