//! Stateless request builder and response parser for the data-management API.
//!
//! # Design
//! `ArcaClient` holds only its immutable [`ApiConfig`] and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Calls resolve independently; nothing here orders concurrent requests. A
//! caller that needs sequencing executes the next request after parsing the
//! previous response.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::request::RequestSpec;
use crate::types::{
    CreateResource, CreateValue, GeonameEntry, HlistNode, ResourceInfo, SearchParams,
    SearchResult, Session, UpdateValue, ValueInfo,
};

/// Synchronous, stateless client for the data-management API.
#[derive(Debug, Clone)]
pub struct ArcaClient {
    config: ApiConfig,
}

impl ArcaClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // --- resources ---

    pub fn build_get_resource(&self, id: &str) -> Result<HttpRequest, ApiError> {
        RequestSpec::get("resources").path_param(id).build(&self.config)
    }

    pub fn parse_get_resource(&self, response: HttpResponse) -> Result<ResourceInfo, ApiError> {
        check_status(&response, 200)?;
        deserialize(&response.body)
    }

    pub fn build_create_resource(&self, input: &CreateResource) -> Result<HttpRequest, ApiError> {
        RequestSpec::post("resources").body(input)?.build(&self.config)
    }

    pub fn parse_create_resource(&self, response: HttpResponse) -> Result<ResourceInfo, ApiError> {
        check_status(&response, 201)?;
        deserialize(&response.body)
    }

    pub fn build_delete_resource(&self, id: &str) -> Result<HttpRequest, ApiError> {
        RequestSpec::delete("resources").path_param(id).build(&self.config)
    }

    pub fn parse_delete_resource(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    // --- values ---

    pub fn build_create_value(&self, input: &CreateValue) -> Result<HttpRequest, ApiError> {
        RequestSpec::post("values").body(input)?.build(&self.config)
    }

    pub fn parse_create_value(&self, response: HttpResponse) -> Result<ValueInfo, ApiError> {
        check_status(&response, 201)?;
        deserialize(&response.body)
    }

    pub fn build_update_value(
        &self,
        id: &str,
        input: &UpdateValue,
    ) -> Result<HttpRequest, ApiError> {
        RequestSpec::put("values")
            .path_param(id)
            .body(input)?
            .build(&self.config)
    }

    pub fn parse_update_value(&self, response: HttpResponse) -> Result<ValueInfo, ApiError> {
        check_status(&response, 200)?;
        deserialize(&response.body)
    }

    pub fn build_delete_value(&self, id: &str) -> Result<HttpRequest, ApiError> {
        RequestSpec::delete("values").path_param(id).build(&self.config)
    }

    pub fn parse_delete_value(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    // --- session ---

    /// Credentials travel as a Basic-Authorization header, never in the body.
    pub fn build_login(&self, username: &str, password: &str) -> Result<HttpRequest, ApiError> {
        RequestSpec::post("session")
            .credentials(username, password)
            .build(&self.config)
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<Session, ApiError> {
        check_status(&response, 200)?;
        deserialize(&response.body)
    }

    pub fn build_logout(&self) -> Result<HttpRequest, ApiError> {
        RequestSpec::delete("session").build(&self.config)
    }

    pub fn parse_logout(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    // --- hierarchical lists ---

    pub fn build_get_hlist(&self, id: &str) -> Result<HttpRequest, ApiError> {
        RequestSpec::get("hlists").path_param(id).build(&self.config)
    }

    pub fn parse_get_hlist(&self, response: HttpResponse) -> Result<Vec<HlistNode>, ApiError> {
        check_status(&response, 200)?;
        deserialize(&response.body)
    }

    // --- search ---

    pub fn build_search(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<HttpRequest, ApiError> {
        let mut spec = RequestSpec::get("search").path_param(query);
        if let Some(search_type) = &params.search_type {
            spec = spec.query("searchtype", search_type);
        }
        if let Some(restype) = &params.restype {
            spec = spec.query("restype", restype);
        }
        if let Some(limit) = params.limit {
            spec = spec.query("limit", &limit.to_string());
        }
        spec.build(&self.config)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<SearchResult, ApiError> {
        check_status(&response, 200)?;
        deserialize(&response.body)
    }

    // --- geonames ---

    pub fn build_lookup_geoname(&self, prefix: &str) -> Result<HttpRequest, ApiError> {
        RequestSpec::get("geonames").query("q", prefix).build(&self.config)
    }

    pub fn parse_lookup_geoname(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<GeonameEntry>, ApiError> {
        check_status(&response, 200)?;
        deserialize(&response.body)
    }

    // --- markup documents ---

    /// `name` is the document file name, e.g. `"intro.html"`. The builder
    /// flags the expected response as markup, and the parser hands the body
    /// back verbatim.
    pub fn build_get_document(&self, name: &str) -> Result<HttpRequest, ApiError> {
        RequestSpec::get(&format!("doc/{name}")).build(&self.config)
    }

    pub fn parse_get_document(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn deserialize<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
