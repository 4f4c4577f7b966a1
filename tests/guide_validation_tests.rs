use validator::Validate;
use villagestay::models::dtos::{RegisterGuideRequest, MAX_HOURLY_RATE, MIN_HOURLY_RATE};

fn valid_request() -> RegisterGuideRequest {
    RegisterGuideRequest {
        village: "Khonoma".to_string(),
        district: "Kohima".to_string(),
        state: "Nagaland".to_string(),
        pincode: "797001".to_string(),
        specialties: vec!["Pottery".to_string(), "Village Walks".to_string()],
        languages: vec!["English".to_string(), "Hindi".to_string()],
        gender: Some("female".to_string()),
        years_experience: Some("3-5".to_string()),
        description: None,
        hourly_rate: 40_000,
        availability: vec![],
        gallery_images: vec![],
        certifications: vec![],
    }
}

#[test]
fn test_valid_registration_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_hourly_rate_bounds_are_inclusive() {
    let mut req = valid_request();

    req.hourly_rate = MIN_HOURLY_RATE;
    assert!(req.validate().is_ok());

    req.hourly_rate = MAX_HOURLY_RATE;
    assert!(req.validate().is_ok());

    req.hourly_rate = MIN_HOURLY_RATE - 1;
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("hourly_rate"));

    req.hourly_rate = MAX_HOURLY_RATE + 1;
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("hourly_rate"));
}

#[test]
fn test_at_least_two_specialties_required() {
    let mut req = valid_request();
    req.specialties = vec!["Pottery".to_string()];
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("specialties"));
}

#[test]
fn test_at_least_two_languages_required() {
    let mut req = valid_request();
    req.languages = vec![];
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("languages"));
}

#[test]
fn test_pincode_length_enforced() {
    let mut req = valid_request();
    req.pincode = "797".to_string();
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("pincode"));
}

#[test]
fn test_empty_location_fields_rejected() {
    let mut req = valid_request();
    req.village = String::new();
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("village"));
}
