use axum::{Json, extract::State, http::StatusCode};

use crate::{AppState, cache::CacheStats};

// 仅在调试模式下挂载

pub async fn clear(State(state): State<AppState>) -> StatusCode {
    state.cache.clear();
    StatusCode::NO_CONTENT
}

pub async fn stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}
