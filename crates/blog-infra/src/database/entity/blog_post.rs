//! Blog post entity for SeaORM.
//!
//! The author is kept as a JSON document so both the structured and the
//! plain-text shapes round-trip unchanged.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::{Author, BlogPost};
use blog_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    pub author: Json,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub(crate) fn author_document(author: &Author) -> Result<Json, RepoError> {
    serde_json::to_value(author).map_err(|e| RepoError::Corrupt(e.to_string()))
}

/// Conversion from SeaORM Model to domain BlogPost.
impl TryFrom<Model> for BlogPost {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let author = serde_json::from_value(model.author)
            .map_err(|e| RepoError::Corrupt(format!("author of post {}: {}", model.id, e)))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            author,
            content: model.content,
            created: model.created.into(),
        })
    }
}

/// Conversion from domain BlogPost to SeaORM ActiveModel.
impl TryFrom<BlogPost> for ActiveModel {
    type Error = RepoError;

    fn try_from(post: BlogPost) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(post.id),
            title: Set(post.title),
            author: Set(author_document(&post.author)?),
            content: Set(post.content),
            created: Set(post.created.into()),
        })
    }
}
