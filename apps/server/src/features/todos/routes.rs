use crate::core::error::ApiError;
use crate::AppState;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use todo_types::{
    CreateTodoRequest, ErrorBody, MessageResponse, Todo, TodoPathParams, UpdateTodoRequest,
};
use tracing::error;

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("todo {id} not found"))
}

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todo items in creation order", body = [Todo]),
    ),
    tag = "Todos"
)]
pub async fn list(Extension(st): Extension<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let rows = st.todos.list().await.map_err(|err| {
        error!(?err, "failed to list todos");
        ApiError::Internal
    })?;

    Ok(Json(rows.into_iter().map(Todo::from).collect()))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(TodoPathParams),
    responses(
        (status = 200, description = "The todo item", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorBody),
    ),
    tag = "Todos"
)]
pub async fn get(
    Extension(st): Extension<AppState>,
    Path(TodoPathParams { id }): Path<TodoPathParams>,
) -> Result<Json<Todo>, ApiError> {
    let row = st.todos.get(id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => not_found(id),
        other => {
            error!(error = ?other, "failed to load todo");
            ApiError::Internal
        }
    })?;

    Ok(Json(row.into()))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 422, description = "Missing or empty title", body = ErrorBody),
    ),
    tag = "Todos"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".into()));
    }

    let row = st
        .todos
        .create(&req.title, req.description.as_deref())
        .await
        .map_err(|err| {
            error!(?err, "failed to create todo");
            ApiError::Internal
        })?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(TodoPathParams),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 422, description = "Empty title", body = ErrorBody),
    ),
    tag = "Todos"
)]
pub async fn update(
    Extension(st): Extension<AppState>,
    Path(TodoPathParams { id }): Path<TodoPathParams>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("title must not be empty".into()));
        }
    }

    let row = st
        .todos
        .update(
            id,
            req.title.as_deref(),
            req.description.as_deref(),
            req.completed,
        )
        .await
        .map_err(|err| match err {
            sqlx::Error::RowNotFound => not_found(id),
            other => {
                error!(error = ?other, "failed to update todo");
                ApiError::Internal
            }
        })?;

    Ok(Json(row.into()))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(TodoPathParams),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 404, description = "Todo not found", body = ErrorBody),
    ),
    tag = "Todos"
)]
pub async fn delete(
    Extension(st): Extension<AppState>,
    Path(TodoPathParams { id }): Path<TodoPathParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let row = st.todos.delete(id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => not_found(id),
        other => {
            error!(error = ?other, "failed to delete todo");
            ApiError::Internal
        }
    })?;

    Ok(Json(MessageResponse {
        message: format!("todo {} deleted", row.id),
    }))
}
