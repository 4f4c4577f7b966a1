use http::StatusCode;
use villagestay::ApiError;

fn status_of(err: ApiError) -> StatusCode {
    let (status, _): (StatusCode, String) = err.into();
    status
}

#[test]
fn test_policy_violations_map_to_bad_request() {
    assert_eq!(
        status_of(ApiError::Policy("Guides cannot book themselves".to_string())),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_auth_maps_to_unauthorized() {
    assert_eq!(
        status_of(ApiError::Auth("Missing bearer token".to_string())),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn test_unauthorized_maps_to_forbidden() {
    assert_eq!(
        status_of(ApiError::Unauthorized("Not your booking".to_string())),
        StatusCode::FORBIDDEN
    );
}

#[test]
fn test_invalid_transition_maps_to_conflict() {
    let err = ApiError::InvalidTransition {
        from: "completed".to_string(),
        to: "pending".to_string(),
    };
    let (status, body): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("completed -> pending"));
}

#[test]
fn test_conflict_and_not_found() {
    assert_eq!(
        status_of(ApiError::Conflict("Slot already booked".to_string())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status_of(ApiError::NotFound("Guide not found".to_string())),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_unique_violation_maps_to_conflict() {
    // A second default payment method racing past the count check lands
    // on the partial unique index and must surface as 409.
    let err = ApiError::Database(diesel::result::Error::DatabaseError(
        diesel::result::DatabaseErrorKind::UniqueViolation,
        Box::new("duplicate key value violates unique constraint".to_string()),
    ));
    assert_eq!(status_of(err), StatusCode::CONFLICT);
}

#[test]
fn test_diesel_not_found_maps_to_not_found() {
    assert_eq!(
        status_of(ApiError::Database(diesel::result::Error::NotFound)),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_connection_trouble_maps_to_service_unavailable() {
    assert_eq!(
        status_of(ApiError::DatabaseConnection("pool exhausted".to_string())),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        status_of(ApiError::Upstream("gateway timeout".to_string())),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
