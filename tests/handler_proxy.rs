mod common;

use astro_gateway::api::routes::api_routes;
use axum::{
    Json, Router,
    body::Bytes,
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use axum_test::TestServer;
use serde_json::{Value, json};

fn server_for(base_url: &str) -> TestServer {
    let app = Router::new()
        .nest("/api", api_routes())
        .with_state(common::create_test_state(base_url));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_chart_forwards_body_to_backend_path() {
    let backend = common::spawn_echo_backend().await;
    let server = server_for(&backend);

    let body = json!({ "birth": common::asha() });
    let response = server.post("/api/chart").json(&body).await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["method"], "POST");
    assert_eq!(json["path"], "/api/py/chart");
    assert_eq!(json["body"], body);
    assert_eq!(json["headers"]["content-type"], "application/json");
}

#[tokio::test]
async fn test_every_route_reaches_its_backend_path() {
    let backend = common::spawn_echo_backend().await;
    let server = server_for(&backend);

    let pair = json!({ "partnerA": common::asha(), "partnerB": common::ravi() });
    let chart_chat = json!({ "chart": { "lagna": "Leo" }, "question": "Career?" });
    let match_chat = json!({ "result": { "score": 24 }, "question": "Marriage?" });

    let cases = [
        ("/api/compatibility", &pair, "/api/py/compatibility"),
        ("/api/insights/chart", &json!({ "birth": common::asha() }), "/api/py/insights/chart"),
        ("/api/insights/compatibility", &pair, "/api/py/insights/compatibility"),
        ("/api/compatibility/insights", &pair, "/api/py/insights/compatibility"),
        ("/api/chat/chart", &chart_chat, "/api/py/chat/chart"),
        ("/api/chat", &chart_chat, "/api/py/chat/chart"),
        ("/api/chart-chat", &chart_chat, "/api/py/chat/chart"),
        ("/api/chat/compatibility", &match_chat, "/api/py/chat/compatibility"),
        ("/api/match-chat", &match_chat, "/api/py/chat/compatibility"),
    ];

    for (route, body, backend_path) in cases {
        let response = server.post(route).json(body).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["path"], backend_path, "route {route}");
    }
}

#[tokio::test]
async fn test_missing_partner_is_rejected() {
    let backend = common::spawn_echo_backend().await;
    let server = server_for(&backend);

    let response = server
        .post("/api/compatibility")
        .json(&json!({ "partnerA": common::asha() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing partnerA or partnerB data" }));

    let response = server
        .post("/api/compatibility")
        .json(&json!({ "partnerA": common::asha(), "partnerB": null }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_chat_fields_are_rejected() {
    let backend = common::spawn_echo_backend().await;
    let server = server_for(&backend);

    let response = server
        .post("/api/chat/chart")
        .json(&json!({ "chart": {}, "question": "" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/chart")
        .json(&json!({ "name": "no birth" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Missing birth data");
}

#[tokio::test]
async fn test_legacy_chat_aliases_enforce_required_fields() {
    let backend = common::spawn_echo_backend().await;
    let server = server_for(&backend);

    let response = server
        .post("/api/chart-chat")
        .json(&json!({ "question": "Career?" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Chart and question are required"
    );

    let response = server
        .post("/api/match-chat")
        .json(&json!({ "result": { "score": 24 } }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Compatibility result and question are required"
    );
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let backend = common::spawn_echo_backend().await;
    let server = server_for(&backend);

    let response = server
        .post("/api/chart")
        .bytes(Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_allow_listed_headers_and_cookies_are_forwarded() {
    let backend = common::spawn_echo_backend().await;
    let server = server_for(&backend);

    let response = server
        .post("/api/chart")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"))
        .add_header(header::COOKIE, HeaderValue::from_static("session=s1; theme=dark"))
        .add_header(
            HeaderName::from_static("x-vercel-protection-bypass"),
            HeaderValue::from_static("bypass-secret"),
        )
        .add_header(
            HeaderName::from_static("x-test-marker"),
            HeaderValue::from_static("dropped"),
        )
        .json(&json!({ "birth": common::asha() }))
        .await;

    response.assert_status_ok();

    let headers = &response.json::<Value>()["headers"];
    assert_eq!(headers["authorization"], "Bearer abc");
    assert_eq!(headers["cookie"], "session=s1; theme=dark");
    assert_eq!(headers["x-vercel-protection-bypass"], "bypass-secret");
    assert_eq!(headers["x-test-marker"], Value::Null);
}

#[tokio::test]
async fn test_backend_status_and_body_are_relayed() {
    let backend = common::spawn_backend(Router::new().route(
        "/insights/compatibility",
        post(|| async { (StatusCode::CREATED, Json(json!({ "insights": ["steady"] }))) }),
    ))
    .await;
    let server = server_for(&backend);

    let response = server
        .post("/api/insights/compatibility")
        .json(&json!({ "partnerA": common::asha(), "partnerB": common::ravi() }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "insights": ["steady"] }));
}

#[tokio::test]
async fn test_backend_detail_is_relayed_with_status() {
    let backend = common::spawn_backend(Router::new().route(
        "/compatibility",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": "Invalid timezone: Mars/Olympus" })),
            )
        }),
    ))
    .await;
    let server = server_for(&backend);

    let response = server
        .post("/api/compatibility")
        .json(&json!({ "partnerA": common::asha(), "partnerB": common::ravi() }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({ "error": "Invalid timezone: Mars/Olympus" }));
}

#[tokio::test]
async fn test_backend_error_without_body_uses_route_message() {
    let backend = common::spawn_backend(Router::new().route(
        "/chart",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
    ))
    .await;
    let server = server_for(&backend);

    let response = server
        .post("/api/chart")
        .json(&json!({ "birth": common::asha() }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Chart calculation failed" }));
}

#[tokio::test]
async fn test_backend_redirect_is_not_followed() {
    let backend = common::spawn_backend(Router::new().route(
        "/chart",
        post(|| async {
            (
                StatusCode::TEMPORARY_REDIRECT,
                [(header::LOCATION, "https://vercel.com/login")],
            )
        }),
    ))
    .await;
    let server = server_for(&backend);

    let response = server
        .post("/api/chart")
        .json(&json!({ "birth": common::asha() }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("https://vercel.com/login"));
}

#[tokio::test]
async fn test_unreachable_backend_is_service_unavailable() {
    let backend = common::unreachable_backend().await;
    let server = server_for(&backend);

    let response = server
        .post("/api/compatibility")
        .json(&json!({ "partnerA": common::asha(), "partnerB": common::ravi() }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    response.assert_json(&json!({ "error": "Unable to connect to astrology backend" }));
}
