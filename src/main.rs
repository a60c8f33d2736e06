use scolarite_service::{app_router, connect, ensure_schema, seed_if_empty, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("scolarite_service=info".parse()?),
        )
        .init();

    let settings = Settings::from_env();
    let pool = connect(&settings.database_url).await?;
    ensure_schema(&pool).await?;
    seed_if_empty(&pool).await?;

    let app = app_router(AppState { pool });

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
