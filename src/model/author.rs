use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post author (the content API's `authors` resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            slug: String::new(),
            profile_image: None,
            bio: None,
            extra: Map::new(),
        }
    }
}

/// `{ "authors": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authors {
    pub authors: Vec<Author>,
}
