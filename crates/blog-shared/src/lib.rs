//! # Blog Shared
//!
//! Wire types of the blog API: the public post shape and message bodies.

pub mod dto;
pub mod response;

pub use dto::PostResponse;
pub use response::MessageResponse;
