//! Site search results.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A search response reshaped for the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The provider response, untouched.
    pub raw: Value,
    /// The search term as echoed by the provider.
    pub q: String,
    /// Slugs of the posts among the hits, in hit order.
    pub slugs: Vec<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    queries: Queries,
    #[serde(default)]
    items: Option<Vec<SearchItem>>,
}

#[derive(Deserialize)]
struct Queries {
    request: Vec<SearchRequest>,
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(rename = "searchTerms")]
    search_terms: String,
}

#[derive(Deserialize)]
struct SearchItem {
    link: String,
}

impl SearchResult {
    /// Reshapes a provider response.
    ///
    /// Only hits whose link contains `post` are kept, each reduced to the
    /// last `/`-separated segment of its link. No items means no slugs.
    pub fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        let response = SearchResponse::deserialize(&raw)?;

        let q = response
            .queries
            .request
            .into_iter()
            .next()
            .map(|r| r.search_terms)
            .ok_or_else(|| serde_json::Error::custom("queries.request is empty"))?;

        let slugs = response
            .items
            .unwrap_or_default()
            .into_iter()
            .filter(|item| item.link.contains("post"))
            .filter_map(|item| item.link.rsplit('/').next().map(str::to_string))
            .collect();

        Ok(Self { raw, q, slugs })
    }
}
