pub mod edit_user_dto;
pub mod get_beneficiary_dto;
pub mod get_users_filter_dto;
