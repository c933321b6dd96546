use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use todo_types::Todo;

#[derive(Clone)]
pub struct TodoRepository {
    pool: SqlitePool,
}

impl TodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Title emptiness is enforced in the route layer; the store only
    /// guarantees id assignment and the `completed = false` default.
    pub async fn create(&self, title: &str, description: Option<&str>) -> sqlx::Result<TodoRow> {
        sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todo (title, description, completed)
            VALUES (?1, ?2, FALSE)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get(&self, id: i64) -> sqlx::Result<TodoRow> {
        sqlx::query_as::<_, TodoRow>(r#"SELECT * FROM todo WHERE id = ?1"#)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn list(&self) -> sqlx::Result<Vec<TodoRow>> {
        sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT * FROM todo
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// `None` fields keep their current value.
    pub async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        completed: Option<bool>,
    ) -> sqlx::Result<TodoRow> {
        sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todo
            SET title = COALESCE(?2, title),
                description = COALESCE(?3, description),
                completed = COALESCE(?4, completed),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(completed)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> sqlx::Result<TodoRow> {
        sqlx::query_as::<_, TodoRow>(r#"DELETE FROM todo WHERE id = ?1 RETURNING *"#)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
        }
    }
}
