pub mod organization;
pub mod postgres_service;
pub mod revocation_store;
pub mod user;
