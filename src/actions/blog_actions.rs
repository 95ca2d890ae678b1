//! The data needs of the blog, one method each.
//!
//! Each method delivers through one mode; a data need used both ways has a
//! `get_*` and a `fetch_*` twin:
//!
//! | dispatch mode (returns [`Thunk`]) | promise mode (returns `Result<Action, Action>`) |
//! |-----------------------------------|-------------------------------------------------|
//! | `get_posts`, `get_featured_posts`, `get_latest_posts`, `get_features`, `get_pages`, `get_post_by_slug`, `get_tags`, `get_users`, `add_to_mailchimp` | `fetch_posts`, `fetch_features`, `fetch_pages`, `fetch_post_by_slug`, `fetch_users`, `search` |
//!
//! Both modes share the same fetch tasks; only the delivery differs.

use super::{defaults, settle, Action, ActionError, Task, Thunk, WaitingFor};
use crate::config::BlogConfig;
use crate::endpoint::{Endpoint, EndpointBuilder, Query, Resource};
use crate::http::HttpClient;
use crate::model::{Author, Authors, Pages, Posts, SearchResult, Subscriber, Tags};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Entry point of the action layer.
#[derive(Clone)]
pub struct BlogActions {
    http: Arc<dyn HttpClient>,
    endpoints: Arc<EndpointBuilder>,
}

impl BlogActions {
    pub fn new(http: Arc<dyn HttpClient>, config: &BlogConfig) -> Self {
        Self {
            http,
            endpoints: Arc::new(EndpointBuilder::new(config)),
        }
    }

    pub fn endpoints(&self) -> &EndpointBuilder {
        &self.endpoints
    }

    // --- Dispatch mode ---

    /// Non-featured posts for the listing pages.
    #[instrument(skip(self))]
    pub fn get_posts(&self, opts: Query) -> Thunk {
        let endpoint = self.endpoint(Resource::Posts, defaults::posts_page(), &opts, None);
        Thunk::new(WaitingFor::Posts, self.load(endpoint, |p: Posts| Ok(Action::GetPosts(p))))
    }

    #[instrument(skip(self))]
    pub fn get_featured_posts(&self, opts: Query) -> Thunk {
        let endpoint = self.endpoint(Resource::Posts, defaults::featured_posts(), &opts, None);
        Thunk::new(
            WaitingFor::Post,
            self.load(endpoint, |p: Posts| Ok(Action::GetFeaturedPosts(p))),
        )
    }

    #[instrument(skip(self))]
    pub fn get_latest_posts(&self, opts: Query) -> Thunk {
        let endpoint = self.endpoint(Resource::Posts, defaults::latest_posts(), &opts, None);
        Thunk::new(
            WaitingFor::Post,
            self.load(endpoint, |p: Posts| Ok(Action::GetLatestPosts(p))),
        )
    }

    /// A page of featured posts, as the features listing pages through them.
    #[instrument(skip(self))]
    pub fn get_features(&self, opts: Query) -> Thunk {
        let endpoint = self.endpoint(Resource::Posts, defaults::features(), &opts, None);
        Thunk::new(
            WaitingFor::Posts,
            self.load(endpoint, |p: Posts| Ok(Action::GetFeatures(p))),
        )
    }

    #[instrument(skip(self))]
    pub fn get_pages(&self, opts: Query) -> Thunk {
        let endpoint = self.endpoint(Resource::Pages, defaults::pages(), &opts, None);
        Thunk::new(WaitingFor::Pages, self.load(endpoint, |p: Pages| Ok(Action::GetPages(p))))
    }

    /// The detail view's post. Static pages are matched too.
    #[instrument(skip(self))]
    pub fn get_post_by_slug(&self, slug: &str, opts: Query) -> Thunk {
        let endpoint =
            self.endpoint(Resource::PostBySlug, defaults::post_detail(), &opts, Some(slug));
        Thunk::new(WaitingFor::Post, self.load(endpoint, first_post))
    }

    #[instrument(skip(self))]
    pub fn get_tags(&self, opts: Query) -> Thunk {
        let endpoint = self.endpoint(Resource::Tags, defaults::tags(), &opts, None);
        Thunk::new(
            WaitingFor::Post,
            self.load(endpoint, |t: Tags| Ok(Action::GetTags(t.tags))),
        )
    }

    #[instrument(skip(self))]
    pub fn get_users(&self, opts: Query) -> Thunk {
        let endpoint = self.endpoint(Resource::Users, defaults::users(), &opts, None);
        Thunk::new(WaitingFor::Users, self.load(endpoint, users_by_name))
    }

    /// Mailing-list signup. Success is read from the reply's `result`
    /// field, not from the HTTP status.
    #[instrument(skip(self, fields))]
    pub fn add_to_mailchimp(&self, fields: &Subscriber) -> Thunk {
        let endpoint = self.endpoints.mailchimp();
        let http = self.http.clone();
        let body = serde_json::to_value(fields);
        let task: Task = Box::pin(async move {
            let reply = http.json_post(&endpoint, &body?).await?;
            if reply.get("result").and_then(|r| r.as_str()) == Some("success") {
                Ok(Action::Mailchimp(reply))
            } else {
                Err(ActionError::Rejected(reply))
            }
        });
        Thunk::new(WaitingFor::Mailchimp, task)
    }

    // --- Promise mode ---

    /// Non-featured posts, a smaller page than [`BlogActions::get_posts`].
    #[instrument(skip(self))]
    pub async fn fetch_posts(&self, opts: Query) -> Result<Action, Action> {
        let endpoint = self.endpoint(Resource::Posts, defaults::posts(), &opts, None);
        settle(self.load(endpoint, |p: Posts| Ok(Action::GetPosts(p)))).await
    }

    /// A page of featured posts, for the features listing.
    #[instrument(skip(self))]
    pub async fn fetch_features(&self, opts: Query) -> Result<Action, Action> {
        let endpoint = self.endpoint(Resource::Posts, defaults::features(), &opts, None);
        settle(self.load(endpoint, |p: Posts| Ok(Action::GetFeatures(p)))).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_pages(&self, opts: Query) -> Result<Action, Action> {
        let endpoint = self.endpoint(Resource::Pages, defaults::pages(), &opts, None);
        settle(self.load(endpoint, |p: Pages| Ok(Action::GetPages(p)))).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_post_by_slug(&self, slug: &str, opts: Query) -> Result<Action, Action> {
        let endpoint =
            self.endpoint(Resource::PostBySlug, defaults::post_by_slug(), &opts, Some(slug));
        settle(self.load(endpoint, first_post)).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_users(&self, opts: Query) -> Result<Action, Action> {
        let endpoint = self.endpoint(Resource::Users, defaults::users(), &opts, None);
        settle(self.load(endpoint, users_by_name)).await
    }

    /// Site search, reshaped into `{ raw, q, slugs }`.
    #[instrument(skip(self))]
    pub async fn search(&self, q: &str) -> Result<Action, Action> {
        let http = self.http.clone();
        let endpoint = self.endpoints.search(q);
        let task: Task = Box::pin(async move {
            let raw = http.get(&endpoint?).await?;
            Ok(Action::Search(SearchResult::from_raw(raw)?))
        });
        settle(task).await
    }

    // --- Shared plumbing ---

    fn endpoint(
        &self,
        resource: Resource,
        defaults: Query,
        opts: &Query,
        segment: Option<&str>,
    ) -> Endpoint {
        let query = defaults.merged(opts);
        let endpoint = self.endpoints.build(resource, &query, segment);
        debug!(%resource, %endpoint, "Endpoint built");
        endpoint
    }

    /// GET `endpoint`, decode the envelope as `T`, and map it to an action.
    fn load<T, F>(&self, endpoint: Endpoint, transform: F) -> Task
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(T) -> Result<Action, ActionError> + Send + 'static,
    {
        let http = self.http.clone();
        Box::pin(async move {
            let body = http.get(&endpoint).await?;
            let payload: T = serde_json::from_value(body)?;
            transform(payload)
        })
    }
}

fn first_post(posts: Posts) -> Result<Action, ActionError> {
    Ok(Action::GetPost(posts.posts.into_iter().next()))
}

/// Ascending by upper-cased name, then reversed.
fn users_by_name(authors: Authors) -> Result<Action, ActionError> {
    Ok(Action::GetUsers(sort_authors(authors.authors)))
}

pub(crate) fn sort_authors(mut authors: Vec<Author>) -> Vec<Author> {
    authors.sort_by(|a, b| a.name.to_uppercase().cmp(&b.name.to_uppercase()));
    authors.reverse();
    authors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockHttp;
    use crate::http::HttpError;
    use serde_json::json;
    use tokio::sync::mpsc;

    fn actions(mock: &MockHttp) -> BlogActions {
        BlogActions::new(Arc::new(mock.clone()), &BlogConfig::default())
    }

    fn names(authors: &[Author]) -> Vec<&str> {
        authors.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_sort_authors_case_insensitive_then_reversed() {
        let authors = vec![Author::new("bob"), Author::new("Alice"), Author::new("carol")];
        assert_eq!(names(&sort_authors(authors)), vec!["carol", "bob", "Alice"]);
    }

    #[test]
    fn test_sort_authors_keeps_equal_names_stable_before_reversal() {
        let mut first = Author::new("Sam");
        first.id = "1".to_string();
        let mut second = Author::new("SAM");
        second.id = "2".to_string();

        let sorted = sort_authors(vec![first, second, Author::new("ann")]);
        let ids: Vec<&str> = sorted.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", ""]);
    }

    #[tokio::test]
    async fn test_fetch_users_resolves_sorted() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({
            "authors": [{ "name": "bob" }, { "name": "Alice" }, { "name": "carol" }]
        }));

        let action = actions(&mock).fetch_users(Query::new()).await.unwrap();
        match action {
            Action::GetUsers(users) => assert_eq!(names(&users), vec!["carol", "bob", "Alice"]),
            other => panic!("Expected GetUsers, got {:?}", other),
        }
        assert!(mock.requests()[0].endpoint.ends_with("/authors/?key=ff0a6045dcf8a57fae3d429136&limit=all"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_fetch_posts_merges_caller_options() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({ "posts": [] }));

        let opts = Query::new().with("page", 2).with("limit", 3);
        let action = actions(&mock).fetch_posts(opts).await.unwrap();
        assert_eq!(action, Action::GetPosts(Posts::default()));

        let endpoint = &mock.requests()[0].endpoint;
        assert!(endpoint.ends_with(
            "&filter=featured:false&include=authors,tags&limit=3&order=published_at%20DESC&page=2"
        ));
    }

    #[tokio::test]
    async fn test_fetch_post_by_slug_takes_first_post() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({
            "posts": [{ "id": "1", "slug": "negroni", "title": "Negroni" }]
        }));
        mock.expect_get().return_ok(json!({ "posts": [] }));

        let actions = actions(&mock);
        match actions.fetch_post_by_slug("negroni", Query::new()).await.unwrap() {
            Action::GetPost(Some(post)) => assert_eq!(post.title, "Negroni"),
            other => panic!("Expected GetPost, got {:?}", other),
        }
        assert_eq!(
            actions.fetch_post_by_slug("gone", Query::new()).await,
            Ok(Action::GetPost(None))
        );

        let requests = mock.requests();
        assert!(requests[0].endpoint.contains("/posts/slug/negroni/?"));
        assert!(requests[0].endpoint.ends_with("&formats=html&include=authors,tags"));
    }

    #[tokio::test]
    async fn test_promise_mode_rejects_with_error_action() {
        let mock = MockHttp::new();
        mock.expect_get().return_err(HttpError::Status {
            status: 500,
            body: "oops".to_string(),
        });

        let err = actions(&mock).fetch_pages(Query::new()).await.unwrap_err();
        assert!(matches!(err, Action::Error(ActionError::Http(_))));
    }

    #[tokio::test]
    async fn test_malformed_envelope_becomes_error() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({ "pages": "nope" }));

        let err = actions(&mock).fetch_pages(Query::new()).await.unwrap_err();
        assert!(matches!(err, Action::Error(ActionError::Decode(_))));
    }

    #[tokio::test]
    async fn test_search_reshapes_response() {
        let raw = json!({
            "queries": { "request": [{ "searchTerms": "gin" }] },
            "items": [{ "link": "https://x/post/my-slug" }, { "link": "https://x/page/other" }]
        });
        let mock = MockHttp::new();
        mock.expect_get().return_ok(raw.clone());

        let action = actions(&mock).search("gin").await.unwrap();
        assert_eq!(
            action,
            Action::Search(SearchResult {
                raw,
                q: "gin".to_string(),
                slugs: vec!["my-slug".to_string()],
            })
        );
        assert!(mock.requests()[0].endpoint.ends_with("&q=gin"));
    }

    #[tokio::test]
    async fn test_get_latest_posts_has_no_filter() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({ "posts": [{ "id": "1", "slug": "daiquiri" }] }));

        let (tx, mut rx) = mpsc::unbounded_channel();
        actions(&mock).get_latest_posts(Query::new()).run(&tx).await;

        assert_eq!(rx.recv().await.unwrap(), Action::Waiting(WaitingFor::Post));
        match rx.recv().await.unwrap() {
            Action::GetLatestPosts(posts) => assert_eq!(posts.posts[0].slug, "daiquiri"),
            other => panic!("Expected GetLatestPosts, got {:?}", other),
        }
        let endpoint = &mock.requests()[0].endpoint;
        assert!(endpoint.ends_with("?key=ff0a6045dcf8a57fae3d429136&include=authors,tags&limit=6&order=published_at%20DESC"));
        assert!(!endpoint.contains("filter="));
    }

    #[tokio::test]
    async fn test_get_pages_waits_on_pages() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({ "pages": [{ "id": "9", "slug": "about" }] }));

        let (tx, mut rx) = mpsc::unbounded_channel();
        actions(&mock).get_pages(Query::new()).run(&tx).await;

        assert_eq!(rx.recv().await.unwrap(), Action::Waiting(WaitingFor::Pages));
        match rx.recv().await.unwrap() {
            Action::GetPages(pages) => assert_eq!(pages.pages[0].slug, "about"),
            other => panic!("Expected GetPages, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
        assert!(mock.requests()[0]
            .endpoint
            .contains("/pages/?key=ff0a6045dcf8a57fae3d429136&include=authors,tags&limit=18&order=published_at%20DESC"));
    }

    #[tokio::test]
    async fn test_fetch_features_resolves_without_waiting() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({ "posts": [{ "id": "1", "slug": "mai-tai", "featured": true }] }));

        match actions(&mock).fetch_features(Query::new().with("page", 2)).await.unwrap() {
            Action::GetFeatures(posts) => assert!(posts.posts[0].featured),
            other => panic!("Expected GetFeatures, got {:?}", other),
        }
        assert!(mock.requests()[0].endpoint.ends_with(
            "&filter=featured:true&include=authors,tags&limit=9&order=published_at%20DESC&page=2"
        ));
    }

    #[tokio::test]
    async fn test_get_features_dispatches_waiting_posts() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({ "posts": [] }));

        let (tx, mut rx) = mpsc::unbounded_channel();
        actions(&mock).get_features(Query::new().with("page", 3)).run(&tx).await;

        assert_eq!(rx.recv().await.unwrap(), Action::Waiting(WaitingFor::Posts));
        assert_eq!(rx.recv().await.unwrap(), Action::GetFeatures(Posts::default()));
        assert!(mock.requests()[0]
            .endpoint
            .ends_with("&filter=featured:true&include=authors,tags&limit=9&order=published_at%20DESC&page=3"));
    }

    #[tokio::test]
    async fn test_narrowed_fields_pass_through() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({
            "posts": [{ "title": "Paloma", "feature_image": "/img/paloma.jpg" }]
        }));

        let opts = Query::new().with("fields", "title,feature_image");
        match actions(&mock).fetch_posts(opts).await.unwrap() {
            Action::GetPosts(posts) => {
                assert_eq!(posts.posts[0].title, "Paloma");
                assert_eq!(posts.posts[0].feature_image.as_deref(), Some("/img/paloma.jpg"));
            }
            other => panic!("Expected GetPosts, got {:?}", other),
        }
        assert!(mock.requests()[0].endpoint.contains("&fields=title,feature_image"));
    }

    #[tokio::test]
    async fn test_get_tags_with_names_only() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({ "tags": [{ "name": "Rye" }] }));

        let (tx, mut rx) = mpsc::unbounded_channel();
        actions(&mock).get_tags(Query::new().with("fields", "name")).run(&tx).await;

        rx.recv().await.unwrap();
        match rx.recv().await.unwrap() {
            Action::GetTags(tags) => assert_eq!(tags[0].name, "Rye"),
            other => panic!("Expected GetTags, got {:?}", other),
        }
        assert!(mock.requests()[0].endpoint.ends_with("&fields=name&limit=all&order=name"));
    }

    #[tokio::test]
    async fn test_get_tags_dispatches_waiting_then_tags() {
        let mock = MockHttp::new();
        mock.expect_get().return_ok(json!({
            "tags": [{ "name": "Rye", "slug": "rye" }]
        }));

        let (tx, mut rx) = mpsc::unbounded_channel();
        actions(&mock).get_tags(Query::new()).run(&tx).await;

        assert_eq!(rx.recv().await.unwrap(), Action::Waiting(WaitingFor::Post));
        match rx.recv().await.unwrap() {
            Action::GetTags(tags) => assert_eq!(tags[0].slug, "rye"),
            other => panic!("Expected GetTags, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
        assert!(mock.requests()[0]
            .endpoint
            .ends_with("&fields=name,slug&limit=all&order=name"));
    }

    #[tokio::test]
    async fn test_mailchimp_business_failure() {
        let mock = MockHttp::new();
        mock.expect_post()
            .return_ok(json!({ "result": "error", "msg": "already subscribed" }));

        let (tx, mut rx) = mpsc::unbounded_channel();
        actions(&mock)
            .add_to_mailchimp(&Subscriber::new("pour@example.com"))
            .run(&tx)
            .await;

        assert_eq!(rx.recv().await.unwrap(), Action::Waiting(WaitingFor::Mailchimp));
        assert_eq!(
            rx.recv().await.unwrap(),
            Action::Error(ActionError::Rejected(
                json!({ "result": "error", "msg": "already subscribed" })
            ))
        );
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({ "EMAIL": "pour@example.com" }))
        );
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mailchimp_span_omits_subscriber() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::NEW)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mock = MockHttp::new();
        tracing::subscriber::with_default(subscriber, || {
            let _thunk = actions(&mock)
                .add_to_mailchimp(&Subscriber::new("pour@example.com").with_name("Tom", "Collins"));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("add_to_mailchimp"));
        assert!(!output.contains("pour@example.com"));
        assert!(!output.contains("Collins"));
    }

    #[tokio::test]
    async fn test_mailchimp_success() {
        let mock = MockHttp::new();
        mock.expect_post().return_ok(json!({ "result": "success", "msg": "Thanks" }));

        let (tx, mut rx) = mpsc::unbounded_channel();
        actions(&mock)
            .add_to_mailchimp(&Subscriber::new("pour@example.com"))
            .run(&tx)
            .await;

        rx.recv().await.unwrap();
        assert_eq!(
            rx.recv().await.unwrap(),
            Action::Mailchimp(json!({ "result": "success", "msg": "Thanks" }))
        );
    }
}
