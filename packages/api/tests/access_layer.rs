//! Drives `ApiClient` against a stub backend on a local port.

use std::collections::HashMap;

use api::{
    ApiClient, ApiError, AttendancePayload, AttendanceStatus, EmployeePayload, EmployeeRef,
    GroupBy, Role, Session, TeamPayload, TrendParams,
};
use axum::extract::{Form, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};
use store::{KeyValueStore, MemoryStore, SessionKeys, SessionStorage};

const TOKEN: &str = "tok-123";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Could not validate credentials"})),
    )
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if headers.contains_key("authorization") {
        return (StatusCode::BAD_REQUEST, Json(json!({"detail": "unexpected bearer"})));
    }
    match (form.get("username").map(String::as_str), form.get("password").map(String::as_str)) {
        (Some("ada@corp.test"), Some("right")) => (
            StatusCode::OK,
            Json(json!({"access_token": TOKEN, "token_type": "bearer", "role": "ADMIN"})),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect username or password"})),
        ),
    }
}

async fn teams(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!([
            {"team_id": 1, "team_name": "Platform", "created_at": "2024-01-01", "updated_at": "2024-01-02"},
            {"team_id": 2, "team_name": "Ops", "created_at": "2024-01-03", "updated_at": "2024-01-03"}
        ])),
    )
}

async fn create_team(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(json!({"message": "Team created"})))
}

async fn delete_team(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({"message": format!("Team {id} deleted")}))
}

async fn current_employee() -> Json<Value> {
    Json(json!({"employee_id": 7, "name": "Ada", "email": "ada@corp.test", "team_id": 2, "role": "EMPLOYEE"}))
}

async fn create_employee() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"detail": "Email already registered"})),
    )
}

async fn update_employee() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Employee not found"})))
}

async fn create_attendance(Json(body): Json<Value>) -> Json<Value> {
    let mut record = body;
    record["record_id"] = json!(41);
    Json(record)
}

async fn trends(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!([{
        "status": query.get("group_by").cloned().unwrap_or_default(),
        "count": query.len(),
        "percentage": 100.0
    }]))
}

async fn chat(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"response": format!("echo: {}", body["message"].as_str().unwrap_or_default())}))
}

async fn expired() -> (StatusCode, Json<Value>) {
    unauthorized()
}

fn app() -> Router {
    Router::new()
        .route("/token", post(token))
        .route("/teams/", get(teams).post(create_team))
        .route("/teams/{id}", axum::routing::delete(delete_team))
        .route("/employees/", post(create_employee))
        .route("/employees/current", get(current_employee))
        .route("/employees/{id}", put(update_employee))
        .route("/attendance/", post(create_attendance))
        .route("/trends/", get(trends))
        .route("/chat/", post(chat))
        .route("/summarize_attendance/", get(expired))
}

async fn serve() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str, store: &MemoryStore) -> ApiClient<MemoryStore> {
    ApiClient::new(
        base_url,
        SessionStorage::new(store.clone(), SessionKeys::default()),
    )
}

async fn signed_in() -> (ApiClient<MemoryStore>, MemoryStore) {
    let base = serve().await;
    let store = MemoryStore::new();
    let client = client(&base, &store);
    client
        .session()
        .persist(&Session::new(TOKEN, Role::Admin))
        .unwrap();
    (client, store)
}

#[tokio::test]
async fn test_login_persists_session() {
    let base = serve().await;
    let store = MemoryStore::new();
    let client = client(&base, &store);

    let session = client.login("ada@corp.test", "right").await.unwrap();
    assert_eq!(session, Session::new(TOKEN, Role::Admin));
    assert_eq!(store.get("token").as_deref(), Some(TOKEN));
    assert_eq!(store.get("userRole").as_deref(), Some("ADMIN"));
}

#[tokio::test]
async fn test_bad_credentials_leave_storage_untouched() {
    let base = serve().await;
    let store = MemoryStore::new();
    let client = client(&base, &store);

    let err = client.login("ada@corp.test", "wrong").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 401,
            message: "Incorrect username or password".into()
        }
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_blank_credentials_rejected_locally() {
    let store = MemoryStore::new();
    let client = client("http://127.0.0.1:9", &store);
    let err = client.login("", "").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let (client, _) = signed_in().await;
    let teams = client.list_teams().await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[1].team_name, "Ops");
}

#[tokio::test]
async fn test_missing_token_short_circuits() {
    let base = serve().await;
    let store = MemoryStore::new();
    let client = client(&base, &store);
    assert_eq!(client.list_teams().await, Err(ApiError::Unauthenticated));
}

#[tokio::test]
async fn test_401_clears_session() {
    let (client, store) = signed_in().await;
    let err = client.attendance_summary().await.unwrap_err();
    assert_eq!(err, ApiError::SessionExpired);
    assert!(err.is_auth());
    assert!(store.get("token").is_none());
    assert!(store.get("userRole").is_none());
}

#[tokio::test]
async fn test_stale_token_expires() {
    let base = serve().await;
    let store = MemoryStore::new();
    let client = client(&base, &store);
    client
        .session()
        .persist(&Session::new("stale", Role::Employee))
        .unwrap();

    assert_eq!(client.list_teams().await, Err(ApiError::SessionExpired));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_server_messages_surface() {
    let (client, _) = signed_in().await;

    let payload = EmployeePayload {
        name: "Bob".into(),
        email: "bob@corp.test".into(),
        password: Some("pw".into()),
        ..Default::default()
    };
    assert_eq!(
        client.create_employee(&payload).await,
        Err(ApiError::Validation("Email already registered".into()))
    );
    assert_eq!(
        client.update_employee(3, &payload).await,
        Err(ApiError::Rejected {
            status: 404,
            message: "Employee not found".into()
        })
    );
}

#[tokio::test]
async fn test_create_without_echo() {
    let (client, _) = signed_in().await;
    let created = client
        .create_team(&TeamPayload {
            team_name: "QA".into(),
        })
        .await
        .unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn test_create_with_echo() {
    let (client, _) = signed_in().await;
    let payload = AttendancePayload {
        employee_id: Some(7),
        attendance_date: NaiveDate::from_ymd_opt(2024, 3, 4),
        status: AttendanceStatus::Wfh,
        ..Default::default()
    };
    let record = client.create_attendance(&payload).await.unwrap().unwrap();
    assert_eq!(record.record_id, 41);
    assert_eq!(record.employee_id, 7);
    assert_eq!(record.status, AttendanceStatus::Wfh);
}

#[tokio::test]
async fn test_delete_and_current_employee() {
    let (client, _) = signed_in().await;
    client.delete_team(2).await.unwrap();

    let me = client.get_employee(EmployeeRef::Current).await.unwrap();
    assert_eq!(me.employee_id, 7);
    assert_eq!(me.team_id, Some(2));
}

#[tokio::test]
async fn test_trends_query_string() {
    let (client, _) = signed_in().await;
    let mut params = TrendParams::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    );
    params.group_by = Some(GroupBy::Team);

    let rows = client.attendance_trends(&params).await.unwrap();
    assert_eq!(rows[0].status, "team");
    // start_date, end_date, group_by
    assert_eq!(rows[0].count, 3);
}

#[tokio::test]
async fn test_chat_round_trip() {
    let (client, _) = signed_in().await;
    let reply = client.send_chat("  who was absent?  ").await.unwrap();
    assert_eq!(reply, "echo: who was absent?");
    assert!(matches!(
        client.send_chat("   ").await,
        Err(ApiError::Validation(_))
    ));
}
