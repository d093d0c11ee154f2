pub mod in_flight;
pub mod money;
