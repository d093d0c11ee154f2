use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct DepositDto {
    #[validate(range(
        min = 0.01,
        max = 1000000000.0,
        message = "value must be between 0.01 and 1000000000."
    ))]
    pub value: f64,
}
