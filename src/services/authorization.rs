use crate::error::ApiError;
use crate::models::models::{Collection, Insight, VISIBILITY_PUBLIC};
use uuid::Uuid;

/// A record that belongs to a user and carries a visibility flag.
///
/// Every ownership and visibility decision in the handlers goes through
/// this trait, so the rules live in exactly one place.
pub trait Scoped {
    fn owner_id(&self) -> Uuid;
    fn visibility(&self) -> &str;
}

impl Scoped for Insight {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn visibility(&self) -> &str {
        &self.visibility
    }
}

impl Scoped for Collection {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn visibility(&self) -> &str {
        &self.visibility
    }
}

/// Only the owner may mutate or delete a record.
pub fn ensure_owner<R: Scoped>(resource: &R, requester: Uuid) -> Result<(), ApiError> {
    if resource.owner_id() == requester {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "You do not have permission to modify this resource".to_string(),
        ))
    }
}

/// Public records are visible to everyone; private records only to their
/// owner.
pub fn visible_to<R: Scoped>(resource: &R, viewer: Option<Uuid>) -> bool {
    resource.visibility() == VISIBILITY_PUBLIC || viewer == Some(resource.owner_id())
}
