pub mod trip_repository;
pub mod user_repository;
