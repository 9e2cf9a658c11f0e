pub mod handlers;
pub mod routes;
pub mod shared;
pub mod usecases;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    // Логи: консоль + target/logs/backend.log
    let log_dir = std::path::Path::new("target").join("logs");
    shared::logger::init_tracing(&log_dir)?;

    let config = shared::config::load_config()?;

    // Ключ не проверяется при старте: его отсутствие - ошибка конкретного запроса
    if std::env::var(&config.gateway.api_key_env).is_err() {
        tracing::warn!(
            "{} is not set, AI insights requests will fail until it is",
            config.gateway.api_key_env
        );
    }

    let provider = shared::llm::GatewayProvider::new(&config.gateway)
        .map_err(|e| anyhow::anyhow!("AI gateway client init failed: {e}"))?;
    tracing::info!(
        "AI gateway: {} (model {}, timeout {}s)",
        config.gateway.endpoint,
        config.gateway.model,
        config.gateway.timeout_secs
    );

    let state = routes::AppState {
        provider: Arc::new(provider),
    };

    let app = routes::configure_routes(state)
        .layer(middleware::from_fn(shared::logger::request_logger));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
