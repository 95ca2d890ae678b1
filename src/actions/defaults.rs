//! Per-call default options. Caller options are merged over these.

use crate::endpoint::Query;

const INCLUDE: &str = "authors,tags";
const NEWEST_FIRST: &str = "published_at%20DESC";

pub fn posts_page() -> Query {
    Query::new()
        .with("filter", "featured:false")
        .with("include", INCLUDE)
        .with("limit", 18)
        .with("order", NEWEST_FIRST)
}

pub fn posts() -> Query {
    Query::new()
        .with("filter", "featured:false")
        .with("include", INCLUDE)
        .with("limit", 9)
        .with("order", NEWEST_FIRST)
}

pub fn featured_posts() -> Query {
    Query::new()
        .with("filter", "featured:true")
        .with("include", INCLUDE)
        .with("limit", 6)
        .with("order", NEWEST_FIRST)
}

pub fn latest_posts() -> Query {
    Query::new()
        .with("include", INCLUDE)
        .with("limit", 6)
        .with("order", NEWEST_FIRST)
}

pub fn features() -> Query {
    Query::new()
        .with("filter", "featured:true")
        .with("include", INCLUDE)
        .with("limit", 9)
        .with("order", NEWEST_FIRST)
}

pub fn pages() -> Query {
    Query::new()
        .with("include", INCLUDE)
        .with("limit", 18)
        .with("order", NEWEST_FIRST)
}

/// Post detail lookup, matching pages as well as posts.
pub fn post_detail() -> Query {
    Query::new()
        .with("formats", "html")
        .with("include", INCLUDE)
        .with("filter", "page[true,false]")
}

pub fn post_by_slug() -> Query {
    Query::new().with("formats", "html").with("include", INCLUDE)
}

pub fn tags() -> Query {
    Query::new()
        .with("fields", "name,slug")
        .with("limit", "all")
        .with("order", "name")
}

pub fn users() -> Query {
    Query::new().with("limit", "all")
}
