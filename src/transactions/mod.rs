pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod service;
pub mod util;

/// How many records the dashboard shows.
pub static RECENT_TRANSACTIONS: u8 = 5;
