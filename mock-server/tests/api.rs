use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, HlistNode, Resource, Session, StoredValue};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- resources ---

#[tokio::test]
async fn create_resource_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/v1/resources",
            r#"{"restype":"arca:letter","label":"Letter to Schoenberg"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let resource: Resource = body_json(resp).await;
    assert_eq!(resource.label, "Letter to Schoenberg");
    assert!(resource.id.starts_with("r-"));
    assert!(resource.properties.is_empty());
}

#[tokio::test]
async fn get_resource_unknown_id_returns_404() {
    let app = app();
    let resp = app
        .oneshot(get_request("/v1/resources/r-nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_resource_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/v1/resources", r#"{"label":1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- values ---

#[tokio::test]
async fn value_lifecycle_shows_up_in_resource_properties() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/resources",
            r#"{"restype":"arca:letter","label":"Letter"}"#,
        ))
        .await
        .unwrap();
    let resource: Resource = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/values",
            &format!(
                r#"{{"resource_id":"{}","name":"arca:seqnum","valuetype":1,"value":3}}"#,
                resource.id
            ),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let value: StoredValue = body_json(resp).await;
    assert!(value.id.starts_with("v-"));

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/values/{}", value.id),
            r#"{"value":4}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: StoredValue = body_json(resp).await;
    assert_eq!(updated.value, serde_json::json!(4));

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/v1/resources/{}", resource.id)))
        .await
        .unwrap();
    let fetched: Resource = body_json(resp).await;
    assert_eq!(fetched.properties.len(), 1);
    assert_eq!(fetched.properties[0].name, "arca:seqnum");
    assert_eq!(fetched.properties[0].ids, vec![value.id.clone()]);
    assert_eq!(fetched.properties[0].values, vec![serde_json::json!(4)]);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/v1/values/{}", value.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn create_value_for_unknown_resource_returns_404() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/v1/values",
            r#"{"resource_id":"r-nope","name":"arca:seqnum","valuetype":1,"value":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- session ---

#[tokio::test]
async fn login_without_credentials_returns_401() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/session")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_basic_auth_returns_session() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/session")
                // base64("a:b")
                .header(http::header::AUTHORIZATION, "Basic YTpi")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let session: Session = body_json(resp).await;
    assert_eq!(session.user, "a");
    assert!(session.id.starts_with("s-"));
}

// --- hlists ---

#[tokio::test]
async fn seeded_hlist_is_served_flat_with_levels() {
    let app = app();
    let resp = app.oneshot(get_request("/v1/hlists/webern")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let nodes: Vec<HlistNode> = body_json(resp).await;
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].level, 0);
    assert_eq!(nodes[1].level, 1);
}

#[tokio::test]
async fn unknown_hlist_returns_404() {
    let app = app();
    let resp = app.oneshot(get_request("/v1/hlists/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- search ---

#[tokio::test]
async fn search_filters_by_label_and_limit() {
    let app = app();
    for label in ["Letter one", "Letter two", "Score"] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/v1/resources",
                &format!(r#"{{"restype":"arca:letter","label":"{label}"}}"#),
            ))
            .await
            .unwrap();
    }

    let resp = app
        .oneshot(get_request("/v1/search/letter?limit=1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result: serde_json::Value = body_json(resp).await;
    assert_eq!(result["count"], 2);
    assert_eq!(result["hits"].as_array().unwrap().len(), 1);
}

// --- geonames ---

#[tokio::test]
async fn geoname_lookup_is_a_prefix_match() {
    let app = app();
    let resp = app.oneshot(get_request("/v1/geonames?q=ber")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let entries: serde_json::Value = body_json(resp).await;
    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bern", "Berlin"]);
}

// --- documents ---

#[tokio::test]
async fn html_document_is_served_as_markup() {
    let app = app();
    let resp = app.oneshot(get_request("/v1/doc/intro.html")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let body = body_string(resp).await;
    assert!(body.contains("<h1>intro</h1>"));
}

#[tokio::test]
async fn non_html_document_returns_404() {
    let app = app();
    let resp = app.oneshot(get_request("/v1/doc/intro.txt")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
