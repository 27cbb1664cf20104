use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use payledger_core::db::open_db_in_memory;
use payledger_server::{build_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let conn = open_db_in_memory().unwrap();
    build_app(AppState::new(conn), std::path::Path::new("public"))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn as_json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn list_is_empty_on_fresh_store() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn create_read_update_delete_scenario() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "name": "Bob",
            "designation": "Engineer",
            "basic_salary": "5000",
            "hra": "1000",
            "da": "500",
            "deductions": "300"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = as_json(&body);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], "Bob");
    assert_eq!(created["gross_salary"], "6500.00");
    assert_eq!(created["net_salary"], "6200.00");

    let uri = format!("/api/employees/{id}");
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched = as_json(&body);
    assert_eq!(fetched["name"], "Bob");
    assert_eq!(fetched["designation"], "Engineer");
    assert_eq!(fetched["basic_salary"], "5000.00");
    assert_eq!(fetched["net_salary"], "6200.00");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "deductions": "1000" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = as_json(&body);
    assert_eq!(updated["name"], "Bob");
    assert_eq!(updated["designation"], "Engineer");
    assert_eq!(updated["deductions"], "1000.00");
    assert_eq!(updated["net_salary"], "5500.00");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({ "status": "deleted" }));

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_missing_and_blank_fields() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": "Bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_json(&body)["error"].as_str().unwrap().contains("designation"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "name": "   ",
            "designation": "Engineer",
            "basic_salary": "5000",
            "hra": "0",
            "da": "0",
            "deductions": "0"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_json(&body)["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn create_rejects_unparsable_decimal() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "name": "Bob",
            "designation": "Engineer",
            "basic_salary": "lots",
            "hra": "0",
            "da": "0",
            "deductions": "0"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_json(&body)["error"]
        .as_str()
        .unwrap()
        .contains("basic_salary"));
}

#[tokio::test]
async fn create_accepts_json_numbers() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "name": "Numeric",
            "designation": "Analyst",
            "basic_salary": 1200.5,
            "hra": 100,
            "da": 0,
            "deductions": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_json(&body)["net_salary"], "1300.50");
}

#[tokio::test]
async fn create_accepts_form_encoded_bodies() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(
            "name=Eve&designation=Clerk&basic_salary=1000&hra=50&da=25&deductions=10",
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created["name"], "Eve");
    assert_eq!(created["net_salary"], "1065.00");
}

#[tokio::test]
async fn update_ignores_blank_and_unparsable_fields() {
    let app = test_app();

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "name": "Alice",
            "designation": "Manager",
            "basic_salary": "1000",
            "hra": "200",
            "da": "100",
            "deductions": "50"
        })),
    )
    .await;
    let id = as_json(&body)["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{id}"),
        Some(json!({
            "name": "",
            "basic_salary": "not-a-number",
            "hra": "250"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = as_json(&body);
    assert_eq!(updated["name"], "Alice");
    assert_eq!(updated["basic_salary"], "1000.00");
    assert_eq!(updated["hra"], "250.00");
}

#[tokio::test]
async fn missing_ids_return_not_found() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/employees/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/employees/12345",
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/employees/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_segment_is_a_client_error() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/employees/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_employees_in_id_order() {
    let app = test_app();

    for name in ["Carol", "Alice", "Bob"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({
                "name": name,
                "designation": "Staff",
                "basic_salary": "100",
                "hra": "0",
                "da": "0",
                "deductions": "0"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = as_json(&body);
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}
