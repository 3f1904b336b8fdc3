use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a post - either a structured name or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Text(String),
    #[serde(rename_all = "camelCase")]
    Name {
        #[serde(default)]
        first_name: String,
        #[serde(default)]
        last_name: String,
    },
}

impl Author {
    pub fn name(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::Name {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form of the author, e.g. `"Ada Lovelace"`.
    pub fn display_name(&self) -> String {
        match self {
            Author::Text(text) => text.trim().to_string(),
            Author::Name {
                first_name,
                last_name,
            } => format!("{} {}", first_name, last_name).trim().to_string(),
        }
    }
}

/// Blog post entity as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a post from a validated payload, assigning id and creation time.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new_post.title,
            author: new_post.author,
            content: new_post.content,
            created: Utc::now(),
        }
    }

    pub fn author_name(&self) -> String {
        self.author.display_name()
    }

    /// Apply a partial update. `id` and `created` are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

/// Payload for creating a post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub author: Author,
    pub content: String,
}

/// Updatable fields supplied by a client. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.content.is_none()
    }
}
