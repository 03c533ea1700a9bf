pub mod auth_routes;
pub mod report_routes;
pub mod trip_routes;
