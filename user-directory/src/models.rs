//! Data models for the user directory

use serde::{Deserialize, Serialize};

/// A directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub tags: Vec<String>,
}

impl User {
    /// Build a user from borrowed parts
    pub fn new<I, T>(id: u32, name: &str, age: u32, email: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id,
            name: name.to_string(),
            age,
            email: email.to_string(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the user carries `tag` (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// All tags concatenated with no separator, used as the `tags` sort key
    pub fn joined_tags(&self) -> String {
        self.tags.concat()
    }
}
