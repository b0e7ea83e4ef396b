//! Input pre-validation for the presentational layer.
//!
//! The UI runs these checks before invoking the store so an empty or
//! oversized title never costs a round-trip. Whitespace is trimmed from
//! both fields; the title must be non-empty and at most `MAX_TITLE_LEN`
//! characters after trimming.

use crate::error::FormError;
use crate::types::{CreateTodo, UpdateTodo};

/// Maximum title length accepted by the server.
pub const MAX_TITLE_LEN: usize = 200;

fn validate_title(title: &str) -> Result<String, FormError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyTitle);
    }
    let got = trimmed.chars().count();
    if got > MAX_TITLE_LEN {
        return Err(FormError::TitleTooLong {
            max: MAX_TITLE_LEN,
            got,
        });
    }
    Ok(trimmed.to_string())
}

/// Build a creation payload from raw form input.
pub fn new_todo(title: &str, description: &str) -> Result<CreateTodo, FormError> {
    Ok(CreateTodo {
        title: validate_title(title)?,
        description: description.trim().to_string(),
    })
}

/// Build an update payload from raw edit-form input. Both fields are
/// always sent: the edit form shows the full record, so a cleared
/// description is an intentional change.
pub fn edit_todo(title: &str, description: &str) -> Result<UpdateTodo, FormError> {
    Ok(UpdateTodo {
        title: Some(validate_title(title)?),
        description: Some(description.trim().to_string()),
        completed: None,
    })
}
