mod common;

use common::create_test_app_state;
use insightsync::config::security_config::{create_token, verify_token};

#[tokio::test]
async fn test_create_and_verify_token() {
    let state = create_test_app_state();
    let user_id = "2ae4f910-5e9a-4e3f-9c5b-7e3d1c2b4a69";

    let token = create_token(&state, user_id).expect("Failed to create token");

    assert!(!token.is_empty());

    let claims = verify_token(&state, &token).expect("Failed to verify token");

    assert_eq!(claims.sub, user_id);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_token_lasts_seven_days() {
    let state = create_test_app_state();

    let token = create_token(&state, "user").expect("Failed to create token");
    let claims = verify_token(&state, &token).expect("Failed to verify token");

    let lifetime = claims.exp - claims.iat;
    assert_eq!(lifetime, 7 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let state = create_test_app_state();

    let result = verify_token(&state, "invalid.token.here");

    assert!(result.is_err());
}

#[tokio::test]
async fn test_token_with_wrong_secret_rejected() {
    let state = create_test_app_state();

    let token = create_token(&state, "some-user").expect("Failed to create token");

    let mut different_state = (*state).clone();
    different_state.jwt_secret = "different_secret_key_minimum_32_characters_long".to_string();

    let result = verify_token(&different_state, &token);

    assert!(result.is_err());
}

#[test]
fn test_password_hashing() {
    let password = "secret1";
    let hash = bcrypt::hash(password, 12).unwrap();

    // Correct password should verify
    assert!(bcrypt::verify(password, &hash).unwrap());

    // Wrong password should not verify
    assert!(!bcrypt::verify("wrong-password", &hash).unwrap());
}

#[test]
fn test_password_validation() {
    use insightsync::utility::validate_password;

    assert!(validate_password("secret1").is_ok());
    assert!(validate_password("a much longer passphrase").is_ok());

    // Too short
    assert!(validate_password("abc").is_err());

    // Empty or whitespace-only
    assert!(validate_password("").is_err());
    assert!(validate_password("      ").is_err());
}
