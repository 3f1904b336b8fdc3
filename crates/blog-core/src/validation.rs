//! Request body validation.
//!
//! Required fields are checked for presence only, so an explicit empty
//! string passes. Present values must still decode to the expected type.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{Author, NewPost, PostChanges};
use crate::error::{MissingFieldError, ValidationError};

/// Fields that must be present on create and update bodies.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "author", "content"];

const AUTHOR_SHAPE: &str = "a string or a {firstName, lastName} object";

/// Check that every field is a key of `payload`.
///
/// Fails with the first missing field, in the order given.
pub fn require_fields(payload: &Map<String, Value>, fields: &[&str]) -> Result<(), MissingFieldError> {
    match fields.iter().find(|field| !payload.contains_key(**field)) {
        Some(field) => Err(MissingFieldError {
            field: (*field).to_string(),
        }),
        None => Ok(()),
    }
}

/// Validate a create body and decode it.
pub fn new_post(payload: &Map<String, Value>) -> Result<NewPost, ValidationError> {
    require_fields(payload, &REQUIRED_FIELDS)?;

    Ok(NewPost {
        title: required(payload, "title", "a string")?,
        author: required(payload, "author", AUTHOR_SHAPE)?,
        content: required(payload, "content", "a string")?,
    })
}

/// Decode whichever updatable fields are present. Other keys are ignored.
pub fn post_changes(payload: &Map<String, Value>) -> Result<PostChanges, ValidationError> {
    Ok(PostChanges {
        title: decode(payload, "title", "a string")?,
        author: decode::<Author>(payload, "author", AUTHOR_SHAPE)?,
        content: decode(payload, "content", "a string")?,
    })
}

fn required<T: DeserializeOwned>(
    payload: &Map<String, Value>,
    field: &'static str,
    expected: &'static str,
) -> Result<T, ValidationError> {
    decode(payload, field, expected)?.ok_or_else(|| {
        MissingFieldError {
            field: field.to_string(),
        }
        .into()
    })
}

fn decode<T: DeserializeOwned>(
    payload: &Map<String, Value>,
    field: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ValidationError> {
    payload
        .get(field)
        .map(|value| {
            serde_json::from_value(value.clone())
                .map_err(|_| ValidationError::InvalidField { field, expected })
        })
        .transpose()
}
