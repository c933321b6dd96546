pub mod core;
pub mod docs;
pub mod features;

use sqlx::SqlitePool;

use features::todos::repo::TodoRepository;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub todos: TodoRepository,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let todos = TodoRepository::new(db.clone());
        Self { db, todos }
    }
}

pub fn app(state: AppState) -> axum::Router {
    features::router(state).merge(docs::router())
}
