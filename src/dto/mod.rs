pub mod auth_dto;
pub mod common;
pub mod report_dto;
pub mod trip_dto;
