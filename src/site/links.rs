//! Site-relative and absolute links.

use crate::config::SiteConfig;

pub fn post_url(slug: &str) -> String {
    format!("/post/{}", slug)
}

pub fn page_url(page: u32) -> String {
    format!("/page/{}", page)
}

pub fn feature_page_url(page: u32) -> String {
    format!("/feature-page/{}", page)
}

/// Resolves an asset path against the content host. Absolute and
/// protocol-relative URLs are returned unchanged.
pub fn asset_url(site: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        site.host.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Canonical public link to a post.
pub fn permalink(site: &SiteConfig, slug: &str) -> String {
    format!("{}{}", site.www.trim_end_matches('/'), post_url(slug))
}
