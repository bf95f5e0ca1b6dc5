//! `HttpApi` tests against a stub axum server.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use naeilum::api::{
    ApiError, FortuneRequest, HttpApi, NaeilumApi, SelectionLog, SuggestOptions, SuggestRequest,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct ServerState {
    received: Arc<Mutex<Vec<Value>>>,
}

async fn suggest_names(State(state): State<ServerState>, Json(body): Json<Value>) -> Json<Value> {
    state.received.lock().expect("lock").push(body.clone());
    Json(json!({
        "success": true,
        "candidates": [{
            "name_kr": "송월선",
            "name_en": "Song Wil-Seon",
            "hanja": ["宋", "蔚", "宣"],
            "family_name": {"korean": "송", "hanja": "宋", "meaning": "Pine tree"},
            "given_name": [
                {"syllable": "월", "hanja": "蔚", "meaning": "무성하고 아름다운"},
                {"syllable": "선", "hanja": "宣", "meaning": "베풀고 선포하는"}
            ],
            "summary": "무성한 아름다움을 널리 베푸는 사람"
        }],
        "original": {
            "first_name": body["firstName"],
            "last_name": body["lastName"]
        }
    }))
}

async fn fortune(State(state): State<ServerState>, Json(body): Json<Value>) -> Json<Value> {
    state.received.lock().expect("lock").push(body.clone());
    Json(json!({
        "success": true,
        "fortune": {
            "date": "2024/03/09",
            "cosmic_cookie": "The universe is conspiring to bring you exactly what you need.",
            "lucky_snack": "Something crunchy - it will spark creativity.",
            "deeper_look": body["tags"][0]
        }
    }))
}

async fn log_selection(State(state): State<ServerState>, Json(body): Json<Value>) -> StatusCode {
    state.received.lock().expect("lock").push(body);
    StatusCode::NO_CONTENT
}

async fn rejecting() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({"success": false, "error": "no syllables loaded"})),
    )
}

async fn failing() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"success": false, "error": "boom"})),
    )
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "timestamp": "2024-03-09T10:00:00"}))
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn spawn_working_server() -> (String, ServerState) {
    let state = ServerState::default();
    let app = Router::new()
        .route("/api/suggest-names", post(suggest_names))
        .route("/api/fortune", post(fortune))
        .route("/api/log-selection", post(log_selection))
        .route("/health", get(health))
        .with_state(state.clone());
    (spawn(app).await, state)
}

fn suggest_request() -> SuggestRequest {
    SuggestRequest {
        first_name: "Wilson".to_string(),
        last_name: "Smith".to_string(),
        options: SuggestOptions {
            gender: "neutral".to_string(),
            tags: vec!["밝음".to_string(), "지혜".to_string()],
            save: true,
        },
    }
}

#[tokio::test]
async fn test_suggest_names_round_trip() {
    let (url, state) = spawn_working_server().await;
    let api = HttpApi::new(url);

    let candidates = api
        .suggest_names(&suggest_request())
        .await
        .expect("suggest");

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name_kr, "송월선");
    assert_eq!(candidates[0].given_name[1].hanja, "宣");

    let received = state.received.lock().expect("lock");
    assert_eq!(received[0]["firstName"], "Wilson");
    assert_eq!(received[0]["options"]["tags"], json!(["밝음", "지혜"]));
    assert_eq!(received[0]["options"]["save"], true);
}

#[tokio::test]
async fn test_fortune_sends_tags() {
    let (url, state) = spawn_working_server().await;
    let api = HttpApi::new(format!("{url}/"));

    let fortune = api
        .fortune(&FortuneRequest {
            tags: vec!["용기".to_string()],
        })
        .await
        .expect("fortune");

    assert_eq!(fortune.deeper_look, "용기");
    assert_eq!(fortune.date, "2024/03/09");
    assert_eq!(
        state.received.lock().expect("lock")[0],
        json!({"tags": ["용기"]})
    );
}

#[tokio::test]
async fn test_log_selection_accepts_no_content() {
    let (url, state) = spawn_working_server().await;
    let api = HttpApi::new(url);

    api.log_selection(&SelectionLog {
        session_id: "session_abc".to_string(),
        first_name: "Wilson".to_string(),
        last_name: "Smith".to_string(),
        chosen_name: "송월선".to_string(),
        chosen_hanja: vec!["宋".to_string(), "蔚".to_string(), "宣".to_string()],
        tags: vec!["지혜".to_string()],
        save: true,
    })
    .await
    .expect("log selection");

    let received = state.received.lock().expect("lock");
    assert_eq!(received[0]["sessionId"], "session_abc");
    assert_eq!(received[0]["chosenHanja"], json!(["宋", "蔚", "宣"]));
}

#[tokio::test]
async fn test_health() {
    let (url, _state) = spawn_working_server().await;
    let health = HttpApi::new(url).health().await.expect("health");
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_success_false_is_rejected() {
    let app = Router::new()
        .route("/api/suggest-names", post(rejecting))
        .route("/api/fortune", post(rejecting));
    let api = HttpApi::new(spawn(app).await);

    let err = api
        .suggest_names(&suggest_request())
        .await
        .expect_err("should fail");
    match err {
        ApiError::Rejected { endpoint, message } => {
            assert_eq!(endpoint, "/api/suggest-names");
            assert_eq!(message, "no syllables loaded");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = api
        .fortune(&FortuneRequest { tags: Vec::new() })
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::Rejected { .. }));
}

#[tokio::test]
async fn test_server_error_status() {
    let app = Router::new()
        .route("/api/suggest-names", post(failing))
        .route("/api/log-selection", post(failing));
    let api = HttpApi::new(spawn(app).await);

    let err = api
        .suggest_names(&suggest_request())
        .await
        .expect_err("should fail");
    assert!(matches!(
        err,
        ApiError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
    ));

    let err = api
        .log_selection(&SelectionLog {
            session_id: "session_abc".to_string(),
            first_name: "Wilson".to_string(),
            last_name: "Smith".to_string(),
            chosen_name: "송월선".to_string(),
            chosen_hanja: Vec::new(),
            tags: Vec::new(),
            save: true,
        })
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::Status { endpoint: "/api/log-selection", .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = HttpApi::new(format!("http://{addr}"))
        .fortune(&FortuneRequest {
            tags: vec!["밝음".to_string()],
        })
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::Transport { .. }));
}
