//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// PostgreSQL-backed blog post store.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        models.into_iter().map(BlogPost::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let model = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        model.map(BlogPost::try_from).transpose()
    }

    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let active: blog_post::ActiveModel = BlogPost::new(post).try_into()?;
        let model = active.insert(&self.db).await.map_err(query_error)?;

        tracing::debug!(post_id = %model.id, "Inserted blog post");
        BlogPost::try_from(model)
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<BlogPost> = posts.into_iter().map(BlogPost::new).collect();
        let actives = posts
            .iter()
            .cloned()
            .map(blog_post::ActiveModel::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        BlogPostEntity::insert_many(actives)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(count = posts.len(), "Inserted blog posts");
        Ok(posts)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        let Some(model) = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
        else {
            return Ok(None);
        };

        if changes.is_empty() {
            return BlogPost::try_from(model).map(Some);
        }

        // Only supplied fields are marked as set, so the UPDATE touches
        // nothing else.
        let mut active = model.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(author) = changes.author {
            active.author = Set(blog_post::author_document(&author)?);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        let updated = match active.update(&self.db).await {
            Ok(model) => model,
            // Deleted between the read and the write.
            Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(query_error(e)),
        };
        BlogPost::try_from(updated).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}
