use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, NewPost, PostChanges};
use crate::error::RepoError;

/// Blog post store. Each call is a single store operation; there is no
/// cross-call locking, so concurrent writes to one id are last-write-wins.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Store a new post. The store assigns `id` and `created`.
    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError>;

    /// Store several posts at once.
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Apply a partial update. Returns `None` if no post has this id.
    async fn update(&self, id: Uuid, changes: PostChanges)
    -> Result<Option<BlogPost>, RepoError>;

    /// Delete a post. Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;
}
