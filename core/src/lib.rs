//! API client core for a digital-humanities data-management service.
//!
//! # Overview
//! Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - [`ApiConfig`] is built once per client session and immutable afterwards;
//!   there is no global configuration.
//! - [`RequestSpec`] assembles one request from named optional parts (path
//!   parameter, query, body, credentials); [`ArcaClient`] layers the typed
//!   per-operation `build_*` / `parse_*` pairs on top of it.
//! - Failures come back as a typed [`ApiError`]; rendering an error to a user
//!   is the caller's responsibility.
//! - Each call is single-shot: no retry, no timeout, no cancellation. Those
//!   belong to the executing host.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod types;

pub use client::ArcaClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, ResponseFormat};
pub use request::{Credentials, RequestSpec};
pub use types::{
    CreateResource, CreateValue, GeonameEntry, HlistNode, PropertyValue, ResourceInfo,
    SearchHit, SearchParams, SearchResult, Session, UpdateValue, ValueInfo, ValueType,
};
