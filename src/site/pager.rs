//! Pager controls derived from list pagination.

use super::page_url;
use crate::model::Pagination;

/// What a pager shows for one page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub caption: String,
    /// False until the listing has a total, so an empty pager stays hidden.
    pub visible: bool,
}

impl Pager {
    /// Pager whose links are built by `url_for` (e.g. [`page_url`]).
    pub fn with_urls(pagination: &Pagination, url_for: impl Fn(u32) -> String) -> Self {
        Self {
            prev_url: pagination.prev.map(&url_for),
            next_url: pagination.next.map(&url_for),
            caption: format!("Page {} of {}", pagination.page, pagination.pages),
            visible: pagination.total > 0,
        }
    }
}

impl From<&Pagination> for Pager {
    fn from(pagination: &Pagination) -> Self {
        Self::with_urls(pagination, page_url)
    }
}
