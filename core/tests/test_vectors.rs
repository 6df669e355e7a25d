//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector file lists a path (and payload for POST), the expected
//! request, a simulated response, and either the expected JSON result or the
//! expected error. Bodies are compared as parsed JSON, not raw strings.

use fetch_http::{parse_response, FetchError, HttpClient, HttpMethod, HttpResponse};
use serde_json::Value;

const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

fn client() -> HttpClient {
    HttpClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn expected_headers(expected_req: &Value) -> Vec<(String, String)> {
    expected_req["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn check_outcome(name: &str, case: &Value, url: &str, result: Result<Value, FetchError>) {
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error["kind"].as_str().unwrap() {
            "RequestFailed" => match err {
                FetchError::RequestFailed { url: got_url, status } => {
                    assert_eq!(got_url, url, "{name}: error url");
                    assert_eq!(
                        u64::from(status),
                        expected_error["status"].as_u64().unwrap(),
                        "{name}: error status"
                    );
                }
                other => panic!("{name}: expected RequestFailed, got {other:?}"),
            },
            "Parse" => assert!(matches!(err, FetchError::Parse(_)), "{name}: expected Parse"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
    } else {
        assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_get(case["path"].as_str().unwrap());
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, expected_req["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(req.headers, expected_headers(expected_req), "{name}: headers");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = parse_response(&req.url, simulated_response(case));
        check_outcome(name, case, &req.url, result);
    }
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

#[test]
fn post_test_vectors() {
    let raw = include_str!("../../test-vectors/post.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_post(case["path"].as_str().unwrap(), &case["input"]).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, expected_req["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(req.headers, expected_headers(expected_req), "{name}: headers");

        let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = parse_response(&req.url, simulated_response(case));
        check_outcome(name, case, &req.url, result);
    }
}
