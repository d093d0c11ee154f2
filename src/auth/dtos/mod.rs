use std::borrow::Cow;

use regex::Regex;
use validator::ValidationError;

pub mod login_dto;
pub mod register_dto;

lazy_static! {
    pub static ref PASSWORD_REGEX: Regex = Regex::new(r"^[0-9]{6}$").unwrap();
}

lazy_static! {
    pub static ref TRANSACTION_PASSWORD_REGEX: Regex = Regex::new(r"^[0-9]{4}$").unwrap();
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    match PASSWORD_REGEX.is_match(value) {
        true => Ok(()),
        false => {
            let mut error = ValidationError::new("password_validation");
            error.message = Some(Cow::from("password must be exactly 6 digits."));

            Err(error)
        }
    }
}

pub fn validate_transaction_password(value: &str) -> Result<(), ValidationError> {
    match TRANSACTION_PASSWORD_REGEX.is_match(value) {
        true => Ok(()),
        false => {
            let mut error = ValidationError::new("transaction_password_validation");
            error.message = Some(Cow::from("transactionPassword must be exactly 4 digits."));

            Err(error)
        }
    }
}
