//! # Blog Infrastructure
//!
//! Concrete implementations of the `PostRepository` port from `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! Build with `--no-default-features` for the in-memory store alone.

pub mod database;

pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DatabaseConnections, PostgresPostRepository};
