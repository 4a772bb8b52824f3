/**
 * Travel Lists Server Entry Point
 *
 * Loads `.env`, installs tracing, reads the configuration and serves the
 * Axum app until the process is stopped.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = travel_lists::backend::server::AppConfig::from_env()?;
    let app = travel_lists::backend::server::create_app(&config).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin travel-lists-server --features ssr");
    std::process::exit(1);
}
