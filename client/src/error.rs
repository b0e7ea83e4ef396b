//! Error types for the todo client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the resource does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `Http` with the
//! raw status code and body for debugging. `StoreError` wraps `ApiError`
//! so every store operation reports its outcome through a single result
//! type instead of a shared error slot.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and `Transport` impls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (connect failure, I/O error).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id is not in the local collection; no request was sent.
    #[error("no todo with id {0}")]
    UnknownId(i64),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validation errors for user input, raised before any request is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title exceeds {max} characters (got {got})")]
    TitleTooLong { max: usize, got: usize },
}
