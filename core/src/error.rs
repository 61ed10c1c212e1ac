//! Error types for the API client core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body; the core does not try to classify them further, so a
//! network-level failure wrapped by the host, a 500 and a garbled body all
//! surface through the same narrow set of variants. Presenting an error to a
//! user is the caller's job, never a side effect of the request layer.

use thiserror::Error;

/// Errors returned when building requests or parsing responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the addressed entity does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-expected status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The executing host failed to complete the round-trip. The core never
    /// produces this variant itself; it exists so hosts can fold transport
    /// failures into the same error type their callers already handle.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The base URL handed to `ApiConfig` could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
