// Movie Catalog - Web Server
// JSON API over the in-memory catalog.

use anyhow::Result;
use movie_catalog::server::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog_server=info".parse()?),
        )
        .init();

    println!("🎬 Movie Catalog - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Catalog is explicitly constructed here and owned by the server;
    // it starts empty and is discarded on exit.
    let state = AppState::new();
    let app = build_router(state);

    let addr = std::env::var("CATALOG_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    println!("\n🚀 Server running on http://{}", addr);
    println!("   Try: curl http://localhost:3000/TopRatedMovies");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await?;

    Ok(())
}
