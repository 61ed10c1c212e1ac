//! Request construction.
//!
//! # Design
//! `RequestSpec` replaces an older call convention in which every optional
//! piece of a request (path parameter, query, body, credentials, handlers)
//! was inferred from the runtime shape of a variadic argument list. Here each
//! piece is a named builder method, and `build` produces the plain-data
//! [`HttpRequest`] the host executes.
//!
//! Credentials only ever become an `Authorization: Basic …` header. They are
//! never serialized into the body or query string, and the debug log line
//! emitted on build carries the method and URL but no header values.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::Serialize;
use url::form_urlencoded;

use crate::config::{ApiConfig, API_VERSION};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, ResponseFormat};

/// A username/password pair, encoded into a Basic-Authorization header at
/// build time.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Hand-written so the password cannot leak through `{:?}` formatting.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Declarative description of one outbound API call.
///
/// The method and endpoint are fixed at construction; everything else is an
/// optional named field. Setting a field twice keeps the later value, except
/// `query`/`raw_query` which accumulate pairs.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: HttpMethod,
    endpoint: String,
    path_param: Option<String>,
    query: Vec<(String, String)>,
    raw_query: Vec<(String, String)>,
    body: Option<String>,
    credentials: Option<Credentials>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, endpoint: &str) -> Self {
        Self {
            method,
            endpoint: endpoint.to_string(),
            path_param: None,
            query: Vec::new(),
            raw_query: Vec::new(),
            body: None,
            credentials: None,
        }
    }

    pub fn get(endpoint: &str) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: &str) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    pub fn put(endpoint: &str) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    pub fn delete(endpoint: &str) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    /// Append one extra path segment, percent-encoded. Identifiers on this
    /// API are frequently full IRIs, so the segment encoding covers `:` and
    /// `/` as well.
    pub fn path_param(mut self, param: &str) -> Self {
        self.path_param = Some(param.to_string());
        self
    }

    /// Append a percent-encoded query parameter.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a literal, un-encoded `key=value` query pair.
    ///
    /// Older callers appended a second payload object to write calls this
    /// way, and some endpoints still expect the pairs verbatim; prefer
    /// [`query`](Self::query) everywhere else.
    pub fn raw_query(mut self, key: &str, value: &str) -> Self {
        self.raw_query.push((key.to_string(), value.to_string()));
        self
    }

    /// Serialize `body` to JSON and attach it. Absent a body, write requests
    /// go out with no body at all.
    pub fn body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let serialized =
            serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(serialized);
        Ok(self)
    }

    /// Attach credentials, emitted only as a Basic-Authorization header.
    pub fn credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Assemble the final [`HttpRequest`].
    pub fn build(self, config: &ApiConfig) -> Result<HttpRequest, ApiError> {
        let mut url = config.base().clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(config.base().to_string()))?;
            segments.pop_if_empty();
            segments.push(API_VERSION);
            segments.extend(self.endpoint.split('/').filter(|s| !s.is_empty()));
        }

        if let Some(param) = &self.path_param {
            let mut path = url.path().to_string();
            if !path.ends_with('/') {
                path.push('/');
            }
            path.push_str(&encode_segment(param));
            url.set_path(&path);
        }

        for (key, value) in &self.query {
            url.query_pairs_mut().append_pair(key, value);
        }

        let mut assembled = url.to_string();
        for (key, value) in &self.raw_query {
            assembled.push(if assembled.contains('?') { '&' } else { '?' });
            assembled.push_str(key);
            assembled.push('=');
            assembled.push_str(value);
        }

        let mut headers = Vec::new();
        if let Some(creds) = &self.credentials {
            let token = B64.encode(format!("{}:{}", creds.username, creds.password));
            headers.push(("authorization".to_string(), format!("Basic {token}")));
        }
        if self.body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        let expected = match self.method {
            HttpMethod::Get if has_markup_suffix(&self.endpoint) => ResponseFormat::Markup,
            _ => ResponseFormat::Json,
        };

        tracing::debug!(method = self.method.as_str(), url = %assembled, "built request");

        Ok(HttpRequest {
            method: self.method,
            url: assembled,
            headers,
            body: self.body,
            expected,
        })
    }
}

/// Percent-encode one path segment.
///
/// `form_urlencoded` writes spaces as `+`, which only reads back correctly
/// in a query string; inside a path it must be `%20`. Literal `+` input has
/// already been escaped to `%2B` at this point, so the replacement is safe.
fn encode_segment(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn has_markup_suffix(endpoint: &str) -> bool {
    let trimmed = endpoint.trim_end_matches('/');
    trimmed.ends_with(".html") || trimmed.ends_with(".htm")
}
