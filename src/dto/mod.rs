pub mod api_response;
pub mod carbon_budget_dto;
pub mod trip_dto;
pub mod vehicle_dto;
