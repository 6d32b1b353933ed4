use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, middleware::log_errors, routes};

// 页面路由
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(routes::page::index).post(routes::page::submit))
}

// JSON 接口
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/api/search/{rsid}", get(routes::search::search))
}

// 缓存管理路由，仅调试模式挂载
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/cache", delete(routes::cache::clear))
        .route("/api/cache/stats", get(routes::cache::stats))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new().merge(page_routes()).merge(api_routes());

    if state.config.debug {
        tracing::debug!("Mounting cache admin routes");
        router = router.merge(admin_routes());
    }

    router
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
