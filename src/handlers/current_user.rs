use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::CurrentUserResponse;
use crate::models::entities::Profile;
use crate::models::enums::UserType;
use crate::models::AppState;
use crate::schema::profiles;
use crate::services::guide_service::GuideService;
use axum::{extract::State, Extension, Json};
use diesel::prelude::*;
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, warn};

#[utoipa::path(
    get,
    path = "/api/current_user",
    responses(
        (status = 200, description = "Profile of the authenticated principal", body = CurrentUserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No profile for this principal"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Identity"
)]
pub async fn current_user_details(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<CurrentUserResponse>, (StatusCode, String)> {
    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let profile: Profile = profiles::table
        .find(user_id)
        .select(Profile::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Database)?
        .ok_or_else(|| ApiError::NotFound(format!("Profile {}", user_id)))?;

    let guide = GuideService::for_profile(conn, user_id)?;
    let is_guide = guide.is_some();

    // The label may say guide while the guide row is missing; that is an
    // incomplete registration, not a guide.
    let registration_incomplete =
        profile.user_type == UserType::Guide.to_string() && !is_guide;
    if registration_incomplete {
        warn!("Profile {} labeled guide but has no guide row", user_id);
    }

    Ok(Json(CurrentUserResponse {
        profile,
        guide,
        is_guide,
        registration_incomplete,
    }))
}
