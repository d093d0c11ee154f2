pub mod beneficiary;
pub mod user;
