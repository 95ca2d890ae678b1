//! Blog state and its reducer.

use crate::actions::{Action, ActionError, Filter, WaitingFor};
use crate::model::{Author, Pages, Post, Posts, SearchResult, Tag};
use serde_json::Value;

/// Last-known results of each fetch, plus coarse waiting/error flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogState {
    /// Non-featured listing, with its pagination
    pub posts: Posts,
    /// Featured posts for the home page
    pub featured_posts: Posts,
    /// Newest posts regardless of featured flag
    pub latest_posts: Posts,
    /// The current page of the features listing
    pub features: Posts,
    /// Detail view post; `None` when the slug matched nothing or was cleared
    pub post: Option<Post>,
    /// Static pages
    pub pages: Pages,
    /// Tags ordered by name
    pub tags: Vec<Tag>,
    /// Authors, descending by name
    pub users: Vec<Author>,
    /// Last search and the post slugs it matched
    pub search: Option<SearchResult>,
    /// Reply of the last successful signup.
    pub mailchimp: Option<Value>,
    /// Filter selections, replaced wholesale by `SetSelectedFilter`
    pub selected_mixers: Vec<String>,
    pub selected_spirits: Vec<String>,
    pub selected_tags: Vec<String>,
    /// Set by a waiting message, cleared by the next terminal one.
    pub waiting: Option<WaitingFor>,
    /// Last failure; loaded fields are kept alongside it
    pub error: Option<ActionError>,
}

impl BlogState {
    pub fn is_waiting(&self) -> bool {
        self.waiting.is_some()
    }
}

/// Applies one Action Result.
///
/// An error leaves every loaded field as it was.
pub fn reduce(mut state: BlogState, action: Action) -> BlogState {
    match action {
        Action::Waiting(target) => {
            state.waiting = Some(target);
            state.error = None;
            return state;
        }
        Action::GetPosts(posts) => state.posts = posts,
        Action::GetFeaturedPosts(posts) => state.featured_posts = posts,
        Action::GetLatestPosts(posts) => state.latest_posts = posts,
        Action::GetFeatures(posts) => state.features = posts,
        Action::GetPost(post) => state.post = post,
        Action::GetPages(pages) => state.pages = pages,
        Action::GetTags(tags) => state.tags = tags,
        Action::GetUsers(users) => state.users = users,
        Action::Search(result) => state.search = Some(result),
        Action::Mailchimp(reply) => state.mailchimp = Some(reply),
        Action::Error(e) => state.error = Some(e),
        Action::ClearMessaging => {
            state.error = None;
            state.mailchimp = None;
        }
        Action::ClearPosts => state.posts = Posts::default(),
        Action::ClearPostDetail => state.post = None,
        Action::SetSelectedFilter { filter, values } => match filter {
            Filter::Mixers => state.selected_mixers = values,
            Filter::Spirits => state.selected_spirits = values,
            Filter::Tags => state.selected_tags = values,
        },
    }
    state.waiting = None;
    state
}
