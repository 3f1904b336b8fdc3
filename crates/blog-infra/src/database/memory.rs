//! In-memory post store - used when no database is configured, and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// Blog post store backed by a `HashMap` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Remove every post.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by_key(|p| p.created);
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::new(post);
        self.store.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError> {
        let posts: Vec<BlogPost> = posts.into_iter().map(BlogPost::new).collect();

        let mut store = self.store.write().await;
        for post in &posts {
            store.insert(post.id, post.clone());
        }
        Ok(posts)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.get_mut(&id).map(|post| {
            post.apply(changes);
            post.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.store.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::Author;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            author: Author::name("Ada", "Lovelace"),
            content: "Content".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("First")).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found, post);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_partial() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("First")).await.unwrap();

        let changes = PostChanges {
            author: Some(Author::Text("Grace Hopper".into())),
            ..Default::default()
        };
        let updated = repo.update(post.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.title, "First");
        assert_eq!(updated.author_name(), "Grace Hopper");
        assert_eq!(updated.created, post.created);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update(Uuid::new_v4(), PostChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryPostRepository::new();
        let keep = repo.insert(new_post("Keep")).await.unwrap();
        let gone = repo.insert(new_post("Gone")).await.unwrap();

        assert!(repo.delete(gone.id).await.unwrap());
        assert!(!repo.delete(gone.id).await.unwrap());

        assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
        assert_eq!(repo.find_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = InMemoryPostRepository::new();
        repo.insert_many(vec![new_post("a"), new_post("b")])
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
