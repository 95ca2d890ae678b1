//! # Configuration
//!
//! Process-wide settings for the blog: where the content API lives, how to
//! authenticate against it, which search and mailing-list providers to talk
//! to, and how the HTTP client behaves.
//!
//! [`BlogConfig::default`] carries the production values, so a TOML file only
//! needs to name what it overrides:
//!
//! ```toml
//! [blog]
//! host = "http://localhost:2368"
//!
//! [api]
//! key = "0123456789abcdef"
//!
//! [http]
//! timeout_secs = 10
//! ```

mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Root configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub blog: SiteConfig,
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub mailchimp: MailchimpConfig,
    pub http: HttpConfig,
}

/// Identity of the site itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the content host (API requests and assets).
    pub host: String,
    /// Public address of the rendered site.
    pub www: String,
    pub title: String,
    pub description: String,
    pub featured_posts_title: String,
    pub featured_posts_caption: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "https://blog.theportlandpour.com".to_string(),
            www: "https://www.theportlandpour.com".to_string(),
            title: "The Portland Pour".to_string(),
            description: "Cocktail recipes with local ingredients.".to_string(),
            featured_posts_title: "Whiskey cocktails".to_string(),
            featured_posts_caption: "Some of our favorite whiskey cocktails and cocktail recipes \
                featuring some of Portland's local craft distilling bourbon and rye."
                .to_string(),
        }
    }
}

/// Content API location and credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Content API key, sent as `key=`.
    pub key: String,
    /// Versioned path prefix below the host.
    pub path: String,
    /// Legacy client id, sent as `client_id=` together with `secret`.
    pub user: Option<String>,
    /// Legacy client secret, sent as `client_secret=`.
    pub secret: Option<String>,
    pub endpoints: EndpointPaths,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: "ff0a6045dcf8a57fae3d429136".to_string(),
            path: "ghost/api/v2/content".to_string(),
            user: None,
            secret: None,
            endpoints: EndpointPaths::default(),
        }
    }
}

/// API path for each logical resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointPaths {
    pub pages: String,
    pub post_by_slug: String,
    pub posts: String,
    pub tags: String,
    pub users: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            pages: "pages".to_string(),
            post_by_slug: "posts/slug".to_string(),
            posts: "posts".to_string(),
            tags: "tags".to_string(),
            users: "authors".to_string(),
        }
    }
}

/// Site search provider (a custom search engine JSON API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub url: String,
    pub key: String,
    /// Search engine id.
    pub cx: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: "https://www.googleapis.com/customsearch/v1".to_string(),
            key: String::new(),
            cx: String::new(),
        }
    }
}

/// Mailing-list provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailchimpConfig {
    /// Subscribe endpoint. Protocol-relative URLs are accepted.
    pub join_url: String,
}

impl Default for MailchimpConfig {
    fn default() -> Self {
        Self {
            join_url: "//inspecdigital.us10.list-manage.com/subscribe/post-json\
                ?u=2b5f5ea27c2aeb60c18ebca53&id=d633c0fa8c\
                &b_2b5f5ea27c2aeb60c18ebca53_d633c0fa8c="
                .to_string(),
        }
    }
}

/// HTTP client behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout. Unset means requests may wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl BlogConfig {
    /// Parses a TOML document, filling anything missing from the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: BlogConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), host = %config.blog.host, "Config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let host = &self.blog.host;
        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(ConfigError::Invalid {
                field: "blog.host",
                reason: format!("must start with http:// or https://, got: {}", host),
            });
        }
        if self.api.key.is_empty() && self.api.secret.is_none() {
            return Err(ConfigError::Invalid {
                field: "api.key",
                reason: "a content key or a client secret is required".to_string(),
            });
        }
        if self.http.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "http.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
