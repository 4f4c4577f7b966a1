use crate::error::ApiError;
use crate::models::entities::Guide;
use crate::models::AppState;
use crate::services::guide_service::GuideService;
use axum::extract::{Path, State};
use axum::Json;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/guides/{guide_id}",
    params(("guide_id" = Uuid, Path, description = "Guide id")),
    responses(
        (status = 200, description = "Guide listing", body = Guide),
        (status = 404, description = "Guide not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guides"
)]
pub async fn get_guide(
    State(state): State<Arc<AppState>>,
    Path(guide_id): Path<Uuid>,
) -> Result<Json<Guide>, (StatusCode, String)> {
    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let guide = GuideService::fetch(conn, guide_id)?;
    Ok(Json(guide))
}
