pub mod authorization;
pub mod collection_service;
pub mod insight_service;
