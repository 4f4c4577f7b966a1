use crate::error::ApiError;
use crate::models::dtos::{GuideSearchFilter, RegisterGuideRequest, MAX_HOURLY_RATE};
use crate::models::entities::{Guide, NewGuide};
use crate::models::enums::UserType;
use crate::schema::{guides, profiles};
use chrono::Utc;
use diesel::prelude::*;
use tracing::{error, info};
use uuid::Uuid;

pub struct GuideService;

impl GuideService {
    /// Filtered directory search. Filters are conjunctive; absent or
    /// sentinel values are not applied. Only active guides are returned,
    /// ordered by rating with a stable id tie-break.
    pub fn search(
        conn: &mut PgConnection,
        filter: &GuideSearchFilter,
    ) -> Result<Vec<Guide>, ApiError> {
        let mut query = guides::table
            .into_boxed()
            .filter(guides::is_active.eq(true));

        if let Some(location) = filter
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let pattern = format!("%{}%", location);
            query = query.filter(
                guides::village
                    .ilike(pattern.clone())
                    .or(guides::district.ilike(pattern.clone()))
                    .or(guides::state.ilike(pattern)),
            );
        }

        if let Some(specialty) = filter
            .specialty
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.filter(guides::specialties.contains(vec![specialty.to_string()]));
        }

        if let Some(language) = filter
            .language
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.filter(guides::languages.contains(vec![language.to_string()]));
        }

        if let Some(gender) = filter
            .gender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.filter(guides::gender.eq(gender.to_string()));
        }

        if let Some(min_rating) = filter.min_rating {
            if min_rating > 0.0 {
                query = query.filter(guides::rating.ge(min_rating));
            }
        }

        // A cap at the policy ceiling is the UI's "any rate" sentinel.
        if let Some(max_rate) = filter.max_rate {
            if max_rate < MAX_HOURLY_RATE {
                query = query.filter(guides::hourly_rate.le(max_rate));
            }
        }

        query
            .order((guides::rating.desc(), guides::id.asc()))
            .select(Guide::as_select())
            .load(conn)
            .map_err(|e| {
                error!("Guide search failed: {}", e);
                ApiError::Database(e)
            })
    }

    pub fn fetch(conn: &mut PgConnection, guide_id: Uuid) -> Result<Guide, ApiError> {
        guides::table
            .find(guide_id)
            .select(Guide::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)?
            .ok_or_else(|| ApiError::NotFound(format!("Guide {}", guide_id)))
    }

    /// The guide row owned by a profile, if one exists.
    pub fn for_profile(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<Guide>, ApiError> {
        guides::table
            .filter(guides::user_id.eq(user_id))
            .select(Guide::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    /// Guide onboarding. The guide insert and the profile role update are
    /// one unit: if either write fails, neither is visible.
    pub fn register(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &RegisterGuideRequest,
    ) -> Result<Guide, ApiError> {
        let profile_exists = profiles::table
            .find(user_id)
            .select(profiles::id)
            .first::<Uuid>(conn)
            .optional()
            .map_err(ApiError::Database)?;

        if profile_exists.is_none() {
            error!("Guide registration for unknown profile {}", user_id);
            return Err(ApiError::NotFound(format!("Profile {}", user_id)));
        }

        let existing = guides::table
            .filter(guides::user_id.eq(user_id))
            .select(guides::id)
            .first::<Uuid>(conn)
            .optional()
            .map_err(ApiError::Database)?;

        if existing.is_some() {
            return Err(ApiError::Conflict(
                "A guide registration already exists for this profile".to_string(),
            ));
        }

        let guide = conn.transaction(|conn| {
            let guide = diesel::insert_into(guides::table)
                .values(NewGuide {
                    user_id,
                    village: req.village.trim().to_string(),
                    district: req.district.trim().to_string(),
                    state: req.state.trim().to_string(),
                    pincode: req.pincode.trim().to_string(),
                    specialties: req.specialties.clone(),
                    languages: req.languages.clone(),
                    gender: req.gender.clone(),
                    years_experience: req.years_experience.clone(),
                    description: req.description.clone(),
                    hourly_rate: req.hourly_rate,
                    availability: req.availability.clone(),
                    gallery_images: req.gallery_images.clone(),
                    certifications: req.certifications.clone(),
                    // New guides await an external reviewer but are listed
                    // immediately; verification gates payouts, not search.
                    is_verified: false,
                    is_active: true,
                })
                .returning(Guide::as_returning())
                .get_result::<Guide>(conn)
                .map_err(ApiError::Database)?;

            diesel::update(profiles::table.find(user_id))
                .set((
                    profiles::user_type.eq(UserType::Guide.to_string()),
                    profiles::updated_at.eq(Utc::now()),
                ))
                .execute(conn)
                .map_err(ApiError::Database)?;

            Ok::<Guide, ApiError>(guide)
        })?;

        info!("Guide registered: id={}, profile={}", guide.id, user_id);
        Ok(guide)
    }
}
