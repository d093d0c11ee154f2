pub mod deposit_dto;
pub mod get_transactions_filter_dto;
pub mod transfer_dto;
