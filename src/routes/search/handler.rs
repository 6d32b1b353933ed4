use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppError, models::VariantRecord, utils::validate_rsid};

/// GET /api/search/{rsid}
pub async fn search(
    State(state): State<AppState>,
    Path(rsid): Path<String>,
) -> Result<Json<Arc<VariantRecord>>, AppError> {
    let rsid = validate_rsid(&rsid).map_err(|_| {
        tracing::warn!("Invalid rsID on API: {:?}", rsid);
        AppError::InvalidRsid
    })?;

    tracing::info!("API lookup for {}", rsid);
    let record = state.lookup(rsid).await?;
    Ok(Json(record))
}
