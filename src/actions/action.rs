//! The tagged message produced by the action layer.

use super::ActionError;
use crate::model::{Author, Pages, Post, Posts, SearchResult, Tag};
use serde_json::Value;
use std::fmt;

/// What a [`Action::Waiting`] message is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaitingFor {
    Posts,
    Post,
    Pages,
    Users,
    Mailchimp,
}

/// A user-selected filter on the listing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Mixers,
    Spirits,
    Tags,
}

/// An Action Result: what happened, and with what data.
///
/// Created per call, consumed once by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Waiting(WaitingFor),
    GetPosts(Posts),
    GetFeaturedPosts(Posts),
    GetLatestPosts(Posts),
    GetFeatures(Posts),
    /// The post looked up by slug, if the API returned one.
    GetPost(Option<Post>),
    GetPages(Pages),
    GetTags(Vec<Tag>),
    GetUsers(Vec<Author>),
    Search(SearchResult),
    /// The list provider's reply to a successful signup.
    Mailchimp(Value),
    Error(ActionError),
    ClearMessaging,
    ClearPosts,
    ClearPostDetail,
    SetSelectedFilter { filter: Filter, values: Vec<String> },
}

impl Action {
    /// Stable name of the message kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Waiting(WaitingFor::Posts) => "blog_waiting_posts",
            Action::Waiting(WaitingFor::Post) => "blog_waiting_post",
            Action::Waiting(WaitingFor::Pages) => "blog_waiting_pages",
            Action::Waiting(WaitingFor::Users) => "blog_waiting_users",
            Action::Waiting(WaitingFor::Mailchimp) => "blog_waiting_mailchimp",
            Action::GetPosts(_) => "blog_get_posts",
            Action::GetFeaturedPosts(_) => "get_featured_posts",
            Action::GetLatestPosts(_) => "get_latest_posts",
            Action::GetFeatures(_) => "blog_get_features",
            Action::GetPost(_) => "blog_get_post",
            Action::GetPages(_) => "blog_get_pages",
            Action::GetTags(_) => "blog_get_tags",
            Action::GetUsers(_) => "blog_get_users",
            Action::Search(_) => "blog_search",
            Action::Mailchimp(_) => "blog_mailchimp",
            Action::Error(_) => "blog_error",
            Action::ClearMessaging => "clear_messaging",
            Action::ClearPosts => "clear_posts",
            Action::ClearPostDetail => "clear_post_detail",
            Action::SetSelectedFilter { filter: Filter::Mixers, .. } => "set_selected_mixers",
            Action::SetSelectedFilter { filter: Filter::Spirits, .. } => "set_selected_spirits",
            Action::SetSelectedFilter { filter: Filter::Tags, .. } => "blog_set_selected_tags",
        }
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self, Action::Waiting(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Action::Error(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

// Actions that need no I/O. Each produces exactly one message.

pub fn request(target: WaitingFor) -> Action {
    Action::Waiting(target)
}

pub fn waiting() -> Action {
    Action::Waiting(WaitingFor::Posts)
}

pub fn clear_messaging() -> Action {
    Action::ClearMessaging
}

pub fn clear_posts() -> Action {
    Action::ClearPosts
}

pub fn clear_post_detail() -> Action {
    Action::ClearPostDetail
}

pub fn set_selected_mixers(values: Vec<String>) -> Action {
    Action::SetSelectedFilter {
        filter: Filter::Mixers,
        values,
    }
}

pub fn set_selected_spirits(values: Vec<String>) -> Action {
    Action::SetSelectedFilter {
        filter: Filter::Spirits,
        values,
    }
}

pub fn set_selected_tags(values: Vec<String>) -> Action {
    Action::SetSelectedFilter {
        filter: Filter::Tags,
        values,
    }
}
