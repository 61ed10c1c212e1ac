//! In-memory test double of the data-management API.
//!
//! DTOs here mirror the client's schema but are defined independently;
//! integration tests catch drift between the two. Resources and values are
//! stored separately and properties are assembled at read time, the way the
//! real server groups values by property name.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::Html,
    routing::{get, post, put},
    Json, Router,
};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub restype: String,
    pub label: String,
    pub properties: Vec<Property>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub valuetype: u16,
    pub ids: Vec<String>,
    pub values: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredValue {
    pub id: String,
    pub resource_id: String,
    pub name: String,
    pub valuetype: u16,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateResource {
    pub restype: String,
    pub label: String,
}

#[derive(Deserialize)]
pub struct CreateValue {
    pub resource_id: String,
    pub name: String,
    pub valuetype: u16,
    pub value: serde_json::Value,
}

#[derive(Deserialize)]
pub struct UpdateValue {
    pub value: Option<serde_json::Value>,
    pub comment: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HlistNode {
    pub id: String,
    pub name: String,
    pub label: String,
    pub level: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geoname {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub label: String,
    pub restype: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub count: u64,
    pub hits: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchQuery {
    restype: Option<String>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct GeonameQuery {
    #[serde(default)]
    q: String,
}

#[derive(Default)]
pub struct AppState {
    resources: HashMap<String, Resource>,
    values: HashMap<String, StoredValue>,
    hlists: HashMap<String, Vec<HlistNode>>,
    geonames: Vec<Geoname>,
}

pub type Db = Arc<RwLock<AppState>>;

fn seeded_state() -> AppState {
    let mut hlists = HashMap::new();
    hlists.insert(
        "webern".to_string(),
        vec![
            HlistNode { id: "n-1".into(), name: "works".into(), label: "Works".into(), level: 0 },
            HlistNode { id: "n-2".into(), name: "songs".into(), label: "Songs".into(), level: 1 },
            HlistNode { id: "n-3".into(), name: "letters".into(), label: "Letters".into(), level: 1 },
        ],
    );
    let geonames = vec![
        Geoname { id: "2661604".into(), name: "Basel".into() },
        Geoname { id: "2661552".into(), name: "Bern".into() },
        Geoname { id: "2950159".into(), name: "Berlin".into() },
        Geoname { id: "2761369".into(), name: "Vienna".into() },
    ];
    AppState {
        hlists,
        geonames,
        ..Default::default()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seeded_state()));
    Router::new()
        .route("/v1/resources", post(create_resource))
        .route(
            "/v1/resources/{id}",
            get(get_resource).delete(delete_resource),
        )
        .route("/v1/values", post(create_value))
        .route("/v1/values/{id}", put(update_value).delete(delete_value))
        .route("/v1/session", post(login).delete(logout))
        .route("/v1/hlists/{id}", get(get_hlist))
        .route("/v1/search/{query}", get(search))
        .route("/v1/geonames", get(lookup_geonames))
        .route("/v1/doc/{name}", get(get_document))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Group a resource's stored values into wire-shape properties. Values are
/// ordered by id within a property, properties by name.
fn assemble(resource: &Resource, values: &HashMap<String, StoredValue>) -> Resource {
    let mut by_name: HashMap<String, Property> = HashMap::new();
    let mut ordered: Vec<&StoredValue> = values
        .values()
        .filter(|v| v.resource_id == resource.id)
        .collect();
    ordered.sort_by(|a, b| a.id.cmp(&b.id));
    for value in ordered {
        let prop = by_name.entry(value.name.clone()).or_insert_with(|| Property {
            name: value.name.clone(),
            valuetype: value.valuetype,
            ids: Vec::new(),
            values: Vec::new(),
        });
        prop.ids.push(value.id.clone());
        prop.values.push(value.value.clone());
    }
    let mut properties: Vec<Property> = by_name.into_values().collect();
    properties.sort_by(|a, b| a.name.cmp(&b.name));
    Resource {
        properties,
        ..resource.clone()
    }
}

async fn get_resource(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, StatusCode> {
    let state = db.read().await;
    state
        .resources
        .get(&id)
        .map(|r| Json(assemble(r, &state.values)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_resource(
    State(db): State<Db>,
    Json(input): Json<CreateResource>,
) -> (StatusCode, Json<Resource>) {
    let resource = Resource {
        id: format!("r-{}", Uuid::new_v4()),
        restype: input.restype,
        label: input.label,
        properties: Vec::new(),
    };
    db.write()
        .await
        .resources
        .insert(resource.id.clone(), resource.clone());
    (StatusCode::CREATED, Json(resource))
}

async fn delete_resource(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut state = db.write().await;
    state
        .resources
        .remove(&id)
        .ok_or(StatusCode::NOT_FOUND)?;
    state.values.retain(|_, v| v.resource_id != id);
    Ok(StatusCode::NO_CONTENT)
}

async fn create_value(
    State(db): State<Db>,
    Json(input): Json<CreateValue>,
) -> Result<(StatusCode, Json<StoredValue>), StatusCode> {
    let mut state = db.write().await;
    if !state.resources.contains_key(&input.resource_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let value = StoredValue {
        id: format!("v-{}", Uuid::new_v4()),
        resource_id: input.resource_id,
        name: input.name,
        valuetype: input.valuetype,
        value: input.value,
        comment: None,
    };
    state.values.insert(value.id.clone(), value.clone());
    Ok((StatusCode::CREATED, Json(value)))
}

async fn update_value(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateValue>,
) -> Result<Json<StoredValue>, StatusCode> {
    let mut state = db.write().await;
    let value = state.values.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(new_value) = input.value {
        value.value = new_value;
    }
    if let Some(comment) = input.comment {
        value.comment = Some(comment);
    }
    Ok(Json(value.clone()))
}

async fn delete_value(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut state = db.write().await;
    state
        .values
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Accepts any non-empty username via Basic auth; the point is to verify the
/// client sends credentials as a header, not to model real authentication.
async fn login(headers: HeaderMap) -> Result<Json<Session>, StatusCode> {
    let user = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(|token| B64.decode(token).ok())
        .and_then(|decoded| String::from_utf8(decoded).ok())
        .and_then(|pair| pair.split_once(':').map(|(user, _)| user.to_string()))
        .filter(|user| !user.is_empty())
        .ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(Session {
        id: format!("s-{}", Uuid::new_v4()),
        user,
    }))
}

async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn get_hlist(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Vec<HlistNode>>, StatusCode> {
    let state = db.read().await;
    state
        .hlists
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn search(
    State(db): State<Db>,
    Path(query): Path<String>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResult> {
    let state = db.read().await;
    let needle = query.to_lowercase();
    let mut hits: Vec<SearchHit> = state
        .resources
        .values()
        .filter(|r| r.label.to_lowercase().contains(&needle))
        .filter(|r| {
            params
                .restype
                .as_ref()
                .map_or(true, |restype| &r.restype == restype)
        })
        .map(|r| SearchHit {
            id: r.id.clone(),
            label: r.label.clone(),
            restype: r.restype.clone(),
        })
        .collect();
    hits.sort_by(|a, b| a.id.cmp(&b.id));
    let count = hits.len() as u64;
    if let Some(limit) = params.limit {
        hits.truncate(limit);
    }
    Json(SearchResult { count, hits })
}

async fn lookup_geonames(
    State(db): State<Db>,
    Query(params): Query<GeonameQuery>,
) -> Json<Vec<Geoname>> {
    let state = db.read().await;
    let prefix = params.q.to_lowercase();
    Json(
        state
            .geonames
            .iter()
            .filter(|g| g.name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect(),
    )
}

async fn get_document(Path(name): Path<String>) -> Result<Html<String>, StatusCode> {
    let stem = name
        .strip_suffix(".html")
        .or_else(|| name.strip_suffix(".htm"))
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Html(format!(
        "<html><body><h1>{stem}</h1><p>Documentation for {stem}.</p></body></html>"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_groups_values_by_property_name() {
        let resource = Resource {
            id: "r-1".to_string(),
            restype: "arca:letter".to_string(),
            label: "Letter".to_string(),
            properties: Vec::new(),
        };
        let mut values = HashMap::new();
        for (id, name, raw) in [
            ("v-1", "arca:seqnum", serde_json::json!(1)),
            ("v-2", "arca:comment", serde_json::json!("first")),
            ("v-3", "arca:comment", serde_json::json!("second")),
        ] {
            values.insert(
                id.to_string(),
                StoredValue {
                    id: id.to_string(),
                    resource_id: "r-1".to_string(),
                    name: name.to_string(),
                    valuetype: 1,
                    value: raw,
                    comment: None,
                },
            );
        }

        let assembled = assemble(&resource, &values);
        assert_eq!(assembled.properties.len(), 2);
        let comment = &assembled.properties[0];
        assert_eq!(comment.name, "arca:comment");
        assert_eq!(comment.ids, vec!["v-2", "v-3"]);
        assert_eq!(comment.values.len(), 2);
    }

    #[test]
    fn assemble_ignores_other_resources_values() {
        let resource = Resource {
            id: "r-1".to_string(),
            restype: "arca:letter".to_string(),
            label: "Letter".to_string(),
            properties: Vec::new(),
        };
        let mut values = HashMap::new();
        values.insert(
            "v-9".to_string(),
            StoredValue {
                id: "v-9".to_string(),
                resource_id: "r-2".to_string(),
                name: "arca:comment".to_string(),
                valuetype: 1,
                value: serde_json::json!("elsewhere"),
                comment: None,
            },
        );
        assert!(assemble(&resource, &values).properties.is_empty());
    }

    #[test]
    fn stored_value_serializes_without_null_comment() {
        let value = StoredValue {
            id: "v-1".to_string(),
            resource_id: "r-1".to_string(),
            name: "arca:seqnum".to_string(),
            valuetype: 1,
            value: serde_json::json!(3),
            comment: None,
        };
        let json = serde_json::to_value(&value).unwrap();
        assert!(json.get("comment").is_none());
        assert_eq!(json["valuetype"], 1);
    }
}
