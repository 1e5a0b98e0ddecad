pub mod carbon_budget_routes;
pub mod trip_routes;
pub mod vehicle_routes;
