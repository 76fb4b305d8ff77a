use axum::serve;
use cache_analyzer::build_app;
use cache_analyzer::config::AppConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Cache analyzer: cache state viewer");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}, upstream={}",
        config.server.host, config.server.port, config.upstream.base_url
    );

    run_server(build_app(&config)?, &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Cache analyzer running on http://{}", bind_address);
    log::info!("reading cache state from {}", config.upstream.base_url);

    serve(listener, app).await?;

    Ok(())
}
