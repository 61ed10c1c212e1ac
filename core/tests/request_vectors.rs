//! Verify request building against JSON test vectors in `test-vectors/`.
//!
//! Each vector describes the request to build and the expected descriptor.
//! Bodies are compared as parsed JSON (not raw strings) to avoid false
//! negatives from field-ordering differences; URLs and headers are compared
//! literally because encoding is part of the contract.

use arca_core::{ApiConfig, HttpMethod, RequestSpec};

const BASE_URL: &str = "http://localhost:3000";

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .map(|entry| {
                    let pair = entry.as_array().unwrap();
                    (
                        pair[0].as_str().unwrap().to_string(),
                        pair[1].as_str().unwrap().to_string(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    let config = ApiConfig::new(BASE_URL).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["request"];
        let expected = &case["expected"];

        let mut spec = RequestSpec::new(
            parse_method(input["method"].as_str().unwrap()),
            input["endpoint"].as_str().unwrap(),
        );
        if let Some(param) = input["path_param"].as_str() {
            spec = spec.path_param(param);
        }
        for (key, value) in pairs(&input["query"]) {
            spec = spec.query(&key, &value);
        }
        for (key, value) in pairs(&input["raw_query"]) {
            spec = spec.raw_query(&key, &value);
        }
        if let Some(creds) = input.get("credentials") {
            spec = spec.credentials(
                creds["username"].as_str().unwrap(),
                creds["password"].as_str().unwrap(),
            );
        }
        if let Some(body) = input.get("body") {
            spec = spec.body(body).unwrap();
        }

        let req = spec.build(&config).unwrap();

        assert_eq!(
            req.method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(req.url, expected["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(req.headers, pairs(&expected["headers"]), "{name}: headers");

        match expected.get("body") {
            Some(expected_body) => {
                let body: serde_json::Value =
                    serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected_body, "{name}: body");
            }
            None => assert!(req.body.is_none(), "{name}: body should be None"),
        }

        let format = expected["format"].as_str().unwrap();
        let actual = match req.expected {
            arca_core::ResponseFormat::Json => "json",
            arca_core::ResponseFormat::Markup => "markup",
        };
        assert_eq!(actual, format, "{name}: format");
    }
}
