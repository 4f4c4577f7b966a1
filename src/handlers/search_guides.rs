use crate::error::ApiError;
use crate::models::dtos::{GuideListResponse, GuideSearchFilter};
use crate::models::AppState;
use crate::services::guide_service::GuideService;
use axum::extract::{Query, State};
use axum::Json;
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};

#[utoipa::path(
    get,
    path = "/api/guides",
    params(GuideSearchFilter),
    responses(
        (status = 200, description = "Active guides matching the filters, rating descending", body = GuideListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guides"
)]
pub async fn search_guides(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<GuideSearchFilter>,
) -> Result<Json<GuideListResponse>, (StatusCode, String)> {
    info!("Guide search: {:?}", filter);

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let guides = GuideService::search(conn, &filter)?;

    Ok(Json(GuideListResponse { guides }))
}
