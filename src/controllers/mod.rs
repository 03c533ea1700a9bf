pub mod report_controller;
pub mod trip_controller;
