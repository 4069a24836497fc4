use diesel::result::Error as DieselError;
use http::StatusCode;
use insightsync::error::ApiError;
use validator::ValidationErrors;

#[test]
fn test_api_error_to_status_code_mapping() {
    // Database NotFound -> 404
    let err = ApiError::Database(DieselError::NotFound);
    let (status, _): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Database other error -> 500 Internal Server Error
    let err = ApiError::Database(DieselError::QueryBuilderError("broken".into()));
    let (status, _): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // Validation error -> 400 Bad Request
    let err = ApiError::Validation(ValidationErrors::new());
    let (status, _): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Duplicate username/email -> 400 Bad Request
    let err = ApiError::Duplicate("Email already exists".to_string());
    let (status, msg): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg, "Email already exists");

    // Auth error -> 401 Unauthorized
    let err = ApiError::Auth("Token expired".to_string());
    let (status, _): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Bad login credentials -> 400 Bad Request
    let err = ApiError::Credentials("Invalid credentials".to_string());
    let (status, msg): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg, "Invalid credentials");

    // Ownership violation -> 403 Forbidden
    let err = ApiError::Forbidden("Not the owner".to_string());
    let (status, _): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Missing or hidden record -> 404 Not Found
    let err = ApiError::NotFound("Collection not found".to_string());
    let (status, msg): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg, "Collection not found");

    // Database connection error -> 500 Internal Server Error
    let err = ApiError::DatabaseConnection("Pool timeout".to_string());
    let (status, msg): (StatusCode, String) = err.into();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(msg.contains("Database connection error"));
}

#[test]
fn test_api_error_display() {
    let err = ApiError::Auth("Invalid credentials".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Authentication error"));
    assert!(display.contains("Invalid credentials"));

    let err = ApiError::Forbidden("Not the owner".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Authorization error"));
}
