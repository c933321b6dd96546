use crate::AppState;
use axum::{routing::get, Extension, Json, Router};
use todo_types::MessageResponse;

pub mod todos;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
    ),
    tag = "Service"
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the TODO API".to_string(),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/todos", todos::router())
        .layer(Extension(state))
}
