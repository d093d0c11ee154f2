use axum::http::StatusCode;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::models::api_error::ApiError,
    transactions::{
        enums::transaction_filter_type::TransactionFilterType,
        models::transaction::Transaction,
    },
};

type Predicate = Box<dyn Fn(&Transaction) -> bool + Send>;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsFilterDto {
    #[serde(rename = "type")]
    pub filter_type: Option<TransactionFilterType>,
    #[validate(range(min = 1, max = 3650, message = "days must be between 1 and 3650."))]
    pub days: Option<u16>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "minValue must not be negative."))]
    pub min_value: Option<f64>,
    #[validate(range(min = 0.0, message = "maxValue must not be negative."))]
    pub max_value: Option<f64>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100."))]
    pub limit: Option<u8>,
}

impl GetTransactionsFilterDto {
    /// Sorts newest first, keeps the records every requested filter accepts,
    /// then applies the limit.
    pub fn apply(
        &self,
        mut transactions: Vec<Transaction>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let mut predicates: Vec<Predicate> = Vec::new();

        // RANGE CHECKS
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "from must not be after to.".to_string(),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "minValue must not be greater than maxValue.".to_string(),
                });
            }
        }

        // PREDICATES
        if let Some(filter_type) = self.filter_type {
            predicates.push(Box::new(move |t: &Transaction| filter_type.matches(t)));
        }
        if let Some(days) = self.days {
            let since = now - Duration::days(days as i64);
            predicates.push(Box::new(move |t: &Transaction| t.date >= since));
        }
        if let Some(from) = self.from {
            predicates.push(Box::new(move |t: &Transaction| t.date.date_naive() >= from));
        }
        if let Some(to) = self.to {
            predicates.push(Box::new(move |t: &Transaction| t.date.date_naive() <= to));
        }
        if let Some(min) = self.min_value {
            predicates.push(Box::new(move |t: &Transaction| t.value.abs() >= min));
        }
        if let Some(max) = self.max_value {
            predicates.push(Box::new(move |t: &Transaction| t.value.abs() <= max));
        }

        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.retain(|t| predicates.iter().all(|predicate| predicate(t)));

        if let Some(limit) = self.limit {
            transactions.truncate(limit as usize);
        }

        Ok(transactions)
    }
}
