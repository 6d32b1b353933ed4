use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use variant_lookup::{AppState, config::Config, router::create_router};

#[tokio::main]
async fn main() {
    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 初始化日志，RUST_LOG 优先于 LOG_LEVEL
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting variant lookup (debug={}, cache capacity={}, timeout={}s)",
        config.debug,
        config.cache_capacity,
        config.request_timeout_secs
    );

    let state = AppState::new(config).expect("Failed to build application state");

    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );

    let app = create_router(state);

    // 启动服务器
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
