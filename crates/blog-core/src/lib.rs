//! # Blog Core
//!
//! The domain layer of the blog API.
//! Blog post records, request validation and the store port, with no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{MissingFieldError, RepoError, ValidationError};
