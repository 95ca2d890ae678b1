//! # Endpoint Builder
//!
//! Pure string composition of request URLs from [`BlogConfig`] plus a
//! logical [`Resource`], a [`Query`] and an optional path segment.
//!
//! Content API URLs have the shape
//!
//! ```text
//! {host}/{path}/{resource}/[{segment}/]?key={key}[&client_id=..&client_secret=..][&{query}]
//! ```
//!
//! so the serialized query is always the exact tail of the URL.

mod error;
mod query;

pub use error::*;
pub use query::*;

use crate::config::{BlogConfig, EndpointPaths};
use std::fmt;
use std::str::FromStr;

/// Logical resources exposed by the content API.
///
/// A closed set: a resource the API does not expose cannot be named, and
/// parsing an unknown name fails with [`EndpointError::UnknownResource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Pages,
    Posts,
    PostBySlug,
    Tags,
    Users,
}

impl Resource {
    /// The logical name, as used in configuration and logs.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Pages => "pages",
            Resource::Posts => "posts",
            Resource::PostBySlug => "postBySlug",
            Resource::Tags => "tags",
            Resource::Users => "users",
        }
    }

    fn path(self, paths: &EndpointPaths) -> &str {
        match self {
            Resource::Pages => &paths.pages,
            Resource::Posts => &paths.posts,
            Resource::PostBySlug => &paths.post_by_slug,
            Resource::Tags => &paths.tags,
            Resource::Users => &paths.users,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pages" => Ok(Resource::Pages),
            "posts" => Ok(Resource::Posts),
            "postBySlug" => Ok(Resource::PostBySlug),
            "tags" => Ok(Resource::Tags),
            "users" => Ok(Resource::Users),
            other => Err(EndpointError::UnknownResource(other.to_string())),
        }
    }
}

/// A fully qualified request URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the first `?`, or `""` when there is none.
    pub fn query(&self) -> &str {
        self.0.split_once('?').map(|(_, q)| q).unwrap_or("")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds endpoints for the content API, the search provider and the
/// mailing-list provider from a fixed configuration.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    api_root: String,
    credentials: String,
    paths: EndpointPaths,
    search_url: String,
    search_key: String,
    search_cx: String,
    join_url: String,
}

impl EndpointBuilder {
    pub fn new(config: &BlogConfig) -> Self {
        let api_root = format!(
            "{}/{}",
            config.blog.host.trim_end_matches('/'),
            config.api.path.trim_matches('/')
        );

        let mut credentials = Query::new().with("key", &config.api.key);
        if let (Some(user), Some(secret)) = (&config.api.user, &config.api.secret) {
            credentials.set("client_id", user);
            credentials.set("client_secret", secret);
        }

        let join_url = match config.mailchimp.join_url.strip_prefix("//") {
            Some(rest) => format!("https://{}", rest),
            None => config.mailchimp.join_url.clone(),
        };

        Self {
            api_root,
            credentials: credentials.to_query_string(),
            paths: config.api.endpoints.clone(),
            search_url: config.search.url.clone(),
            search_key: config.search.key.clone(),
            search_cx: config.search.cx.clone(),
            join_url,
        }
    }

    /// Content API endpoint for `resource`, with `segment` (e.g. a slug)
    /// appended to the resource path. The query string is appended verbatim.
    pub fn build(&self, resource: Resource, query: &Query, segment: Option<&str>) -> Endpoint {
        let mut url = format!("{}/{}/", self.api_root, resource.path(&self.paths));
        if let Some(segment) = segment {
            url.push_str(segment);
            url.push('/');
        }
        url.push('?');
        url.push_str(&self.credentials);
        if !query.is_empty() {
            url.push('&');
            url.push_str(&query.to_query_string());
        }
        Endpoint(url)
    }

    /// Search provider endpoint for the term `q`. The term is URL-encoded.
    pub fn search(&self, q: &str) -> Result<Endpoint, EndpointError> {
        let url = reqwest::Url::parse_with_params(
            &self.search_url,
            &[
                ("key", self.search_key.as_str()),
                ("cx", self.search_cx.as_str()),
                ("q", q),
            ],
        )
        .map_err(|e| EndpointError::InvalidUrl(format!("{}: {}", self.search_url, e)))?;
        Ok(Endpoint(url.into()))
    }

    /// Mailing-list subscribe endpoint.
    pub fn mailchimp(&self) -> Endpoint {
        Endpoint(self.join_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> EndpointBuilder {
        let mut config = BlogConfig::default();
        config.blog.host = "https://blog.example.com/".to_string();
        config.api.key = "k3y".to_string();
        config.search.key = "sk".to_string();
        config.search.cx = "cx1".to_string();
        EndpointBuilder::new(&config)
    }

    #[test]
    fn test_build_list_endpoint() {
        let query = Query::new().with("limit", "all");
        let endpoint = builder().build(Resource::Users, &query, None);
        assert_eq!(
            endpoint.as_str(),
            "https://blog.example.com/ghost/api/v2/content/authors/?key=k3y&limit=all"
        );
    }

    #[test]
    fn test_build_with_slug_segment() {
        let query = Query::new().with("formats", "html");
        let endpoint = builder().build(Resource::PostBySlug, &query, Some("old-fashioned"));
        assert_eq!(
            endpoint.as_str(),
            "https://blog.example.com/ghost/api/v2/content/posts/slug/old-fashioned/?key=k3y&formats=html"
        );
    }

    #[test]
    fn test_query_string_is_exact_suffix() {
        let defaults = Query::new()
            .with("filter", "featured:true")
            .with("limit", 6)
            .with("order", "published_at%20DESC");
        let query = defaults.merged(&Query::new().with("page", 3));
        let endpoint = builder().build(Resource::Posts, &query, None);

        let serialized = query.to_query_string();
        assert!(endpoint.query().ends_with(&serialized));
        assert!(endpoint.as_str().ends_with(&format!("&{}", serialized)));
    }

    #[test]
    fn test_empty_query_leaves_only_credentials() {
        let endpoint = builder().build(Resource::Tags, &Query::new(), None);
        assert_eq!(endpoint.query(), "key=k3y");
    }

    #[test]
    fn test_legacy_client_credentials() {
        let mut config = BlogConfig::default();
        config.api.user = Some("ghost-frontend".to_string());
        config.api.secret = Some("a26d".to_string());
        let endpoint = EndpointBuilder::new(&config).build(Resource::Pages, &Query::new(), None);
        assert!(endpoint
            .query()
            .ends_with("client_id=ghost-frontend&client_secret=a26d"));
    }

    #[test]
    fn test_resource_names_round_trip_through_from_str() {
        for resource in [
            Resource::Pages,
            Resource::Posts,
            Resource::PostBySlug,
            Resource::Tags,
            Resource::Users,
        ] {
            assert_eq!(resource.name().parse::<Resource>(), Ok(resource));
        }
    }

    #[test]
    fn test_unknown_resource_fails_fast() {
        assert_eq!(
            "comments".parse::<Resource>(),
            Err(EndpointError::UnknownResource("comments".to_string()))
        );
    }

    #[test]
    fn test_search_endpoint_encodes_term() {
        let endpoint = builder().search("rye & ginger").unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://www.googleapis.com/customsearch/v1?key=sk&cx=cx1&q=rye+%26+ginger"
        );
    }

    #[test]
    fn test_search_endpoint_rejects_bad_base() {
        let mut config = BlogConfig::default();
        config.search.url = "not a url".to_string();
        let err = EndpointBuilder::new(&config).search("gin").unwrap_err();
        assert!(matches!(err, EndpointError::InvalidUrl(_)));
    }

    #[test]
    fn test_mailchimp_endpoint_resolves_protocol_relative_url() {
        let endpoint = builder().mailchimp();
        assert!(endpoint
            .as_str()
            .starts_with("https://inspecdigital.us10.list-manage.com/subscribe/post-json?"));
    }
}
