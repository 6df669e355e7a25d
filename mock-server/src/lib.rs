//! In-process stand-in for the JSONPlaceholder todo API.
//!
//! Serves a fixed set of seeded todos, echoes POSTed JSON back with `201`,
//! and exposes a couple of endpoints that answer with arbitrary statuses or
//! broken bodies so clients can exercise their failure paths.

pub mod config;

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

pub type Db = Arc<BTreeMap<u64, Todo>>;

pub fn seed() -> BTreeMap<u64, Todo> {
    [
        (1, "delectus aut autem"),
        (2, "quis ut nam facilis et officia qui"),
        (3, "fugiat veniam minus"),
    ]
    .into_iter()
    .map(|(id, title)| {
        let todo = Todo {
            id,
            title: title.to_string(),
            completed: false,
        };
        (id, todo)
    })
    .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/todos", get(list_todos).post(echo_todo))
        .route("/todos/{id}", get(get_todo))
        .route("/status/{code}", get(respond_with_status).post(respond_with_status))
        .route("/malformed", get(malformed))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.values().cloned().collect())
}

async fn echo_todo(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    tracing::debug!(%body, "echoing posted todo");
    (StatusCode::CREATED, Json(body))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> impl IntoResponse {
    match db.get(&id) {
        Some(todo) => (StatusCode::OK, Json(json!(todo))),
        None => {
            tracing::debug!(id, "todo not found");
            (StatusCode::NOT_FOUND, Json(json!({})))
        }
    }
}

async fn respond_with_status(Path(code): Path<u16>) -> impl IntoResponse {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, Json(json!({ "status": code }))),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid status code {code}") })),
        ),
    }
}

async fn malformed() -> (StatusCode, &'static str) {
    (StatusCode::OK, "this is not json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_first_todo() {
        let todos = seed();
        assert_eq!(todos.len(), 3);
        assert_eq!(
            todos[&1],
            Todo {
                id: 1,
                title: "delectus aut autem".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn todo_serializes_in_placeholder_shape() {
        let json = serde_json::to_value(&seed()[&1]).unwrap();
        assert_eq!(
            json,
            json!({"id": 1, "title": "delectus aut autem", "completed": false})
        );
    }

    #[test]
    fn todo_rejects_missing_title() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id":7,"completed":true}"#);
        assert!(result.is_err());
    }
}
