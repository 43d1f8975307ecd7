pub mod booking_routes;
pub mod contract_routes;
pub mod pricing_routes;
pub mod tier_routes;
