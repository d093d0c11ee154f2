pub mod transaction_filter_type;
pub mod transaction_type;
pub mod transfer_kind;
