use server::{app, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let db_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todos.db?mode=rwc".into());
    let db = sqlx::SqlitePool::connect(&db_url).await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    let state = AppState::new(db);

    let bind = std::env::var("SERVER_BIND").unwrap_or_else(|_| "127.0.0.1:8080".into());
    info!(%bind, "todo api listening");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
