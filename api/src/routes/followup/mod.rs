pub mod followup_request;
pub mod followup_route;
