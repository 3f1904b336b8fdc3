//! Data Transfer Objects - response types for the API.

use blog_core::domain::BlogPost;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public representation of a blog post.
///
/// `author` is always the display name, whatever shape the author was
/// stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub title: String,
    pub created: DateTime<Utc>,
}

impl From<&BlogPost> for PostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            author: post.author_name(),
            content: post.content.clone(),
            title: post.title.clone(),
            created: post.created,
        }
    }
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        let author = post.author_name();
        Self {
            id: post.id,
            author,
            content: post.content,
            title: post.title,
            created: post.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::{Author, NewPost};

    #[test]
    fn test_serialized_shape() {
        let post = BlogPost::new(NewPost {
            title: "t".into(),
            author: Author::name("A", "B"),
            content: "c".into(),
        });

        let value = serde_json::to_value(PostResponse::from(&post)).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "content", "created", "id", "title"]);
        assert_eq!(obj["author"], "A B");
        assert_eq!(obj["id"], post.id.to_string());
    }
}
