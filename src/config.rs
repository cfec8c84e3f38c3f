//! Configuration
//!
//! The only setting is the item API base URL. It has no default: it comes
//! from `TODO_API_BASE_URL` at build time or from
//! `<meta name="todo-api-base-url">` in the host page.

use reqwest::Url;
use thiserror::Error;

pub const BASE_URL_META: &str = "todo-api-base-url";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("The item API base URL is not configured. Set TODO_API_BASE_URL at build time or add <meta name=\"todo-api-base-url\" content=\"...\"> to index.html.")]
    MissingBaseUrl,

    #[error("The item API base URL {0:?} is not an absolute http(s) URL")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Absolute http(s) URL without trailing slash
    pub api_base_url: String,
}

impl Config {
    /// Resolve from the build environment, then the host page
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(option_env!("TODO_API_BASE_URL"), meta_content(BASE_URL_META))
    }

    /// Build-time value wins over the page value; blanks count as missing
    pub fn from_sources(build_env: Option<&str>, page_meta: Option<String>) -> Result<Self, ConfigError> {
        let raw = build_env
            .map(str::to_owned)
            .into_iter()
            .chain(page_meta)
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let api_base_url = raw.trim_end_matches('/').to_string();
        match Url::parse(&api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
                Ok(Self { api_base_url })
            }
            _ => Err(ConfigError::InvalidBaseUrl(raw)),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}

#[cfg(not(target_arch = "wasm32"))]
fn meta_content(_name: &str) -> Option<String> {
    None
}
