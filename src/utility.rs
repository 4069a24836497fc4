use validator::ValidationError;

use crate::models::models::{VISIBILITY_PRIVATE, VISIBILITY_PUBLIC};

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let trimmed = password.trim();

    if trimmed.is_empty() || trimmed.len() < 6 {
        return Err(ValidationError::new(
            "Password cannot be empty and must be at least 6 characters long",
        ));
    }

    if trimmed.len() > 128 {
        return Err(ValidationError::new(
            "Password must be at most 128 characters long",
        ));
    }

    Ok(())
}

/// Length rules apply to the trimmed value, since that is what gets stored.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let trimmed = username.trim();

    if trimmed.len() < 3 || trimmed.len() > 30 {
        return Err(ValidationError::new(
            "Username must be between 3 and 30 characters",
        ));
    }

    Ok(())
}

pub fn validate_visibility(visibility: &str) -> Result<(), ValidationError> {
    if visibility == VISIBILITY_PUBLIC || visibility == VISIBILITY_PRIVATE {
        Ok(())
    } else {
        Err(ValidationError::new(
            "Visibility must be either 'public' or 'private'",
        ))
    }
}

/// Trims tags and drops empty entries, preserving order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Removes duplicate ids while preserving first-seen order.
pub fn dedupe_ids(ids: Vec<uuid::Uuid>) -> Vec<uuid::Uuid> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
