pub mod carbon_budget_controller;
pub mod trip_controller;
pub mod vehicle_controller;
