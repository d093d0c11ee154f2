use crate::{
    app::{env::Envy, models::api_error::ApiError},
    auth::dtos::{login_dto::LoginDto, register_dto::RegisterDto},
    store::{models::resource_id::ResourceId, ResourceStore},
    users::util::cpf_cnpj,
};

use super::{
    dtos::get_users_filter_dto::GetUsersFilterDto,
    errors::UsersApiError,
    models::{
        beneficiary::Beneficiary,
        user::{NewUser, User},
    },
};

pub async fn create_user(
    dto: &RegisterDto,
    envy: &Envy,
    store: &dyn ResourceStore,
) -> Result<User, ApiError> {
    let new_user = NewUser::new(dto, envy);

    if !store
        .find_users(&GetUsersFilterDto::by_email(&new_user.email))
        .await?
        .is_empty()
    {
        return Err(UsersApiError::EmailTaken.value());
    }

    if find_user_by_cpf_cnpj(&new_user.cpf_cnpj, store)
        .await?
        .is_some()
    {
        return Err(UsersApiError::CpfCnpjTaken.value());
    }

    let user = store.create_user(&new_user).await?;
    tracing::info!(user_id = %user.id, "user registered");

    Ok(user)
}

/// First user whose stored credentials match, as the store filters them.
/// Seeded accounts may keep mixed-case emails, so the email is tried as
/// typed before its lowercase form.
pub async fn get_user_by_login_dto(
    dto: &LoginDto,
    store: &dyn ResourceStore,
) -> Result<Option<User>, ApiError> {
    let typed = dto.email.trim();
    let lowercase = typed.to_lowercase();

    let mut candidates = vec![typed];
    if lowercase != typed {
        candidates.push(lowercase.as_str());
    }

    for email in candidates {
        let users = store
            .find_users(&GetUsersFilterDto::by_credentials(email, &dto.password))
            .await?;

        if let Some(user) = users.into_iter().next() {
            return Ok(Some(user));
        }
    }

    Ok(None)
}

pub async fn get_user_by_id(id: &ResourceId, store: &dyn ResourceStore) -> Result<User, ApiError> {
    match store.get_user(id).await? {
        Some(user) => Ok(user),
        None => Err(UsersApiError::UserNotFound.value()),
    }
}

/// Tax ids may be stored bare or masked; try the bare digits first.
pub async fn find_user_by_cpf_cnpj(
    value: &str,
    store: &dyn ResourceStore,
) -> Result<Option<User>, ApiError> {
    let digits = cpf_cnpj::strip(value);
    if digits.is_empty() {
        return Ok(None);
    }

    let masked = cpf_cnpj::format(&digits);

    let mut candidates = vec![digits];
    if masked != candidates[0] {
        candidates.push(masked);
    }

    for candidate in candidates {
        let users = store
            .find_users(&GetUsersFilterDto::by_cpf_cnpj(&candidate))
            .await?;

        if let Some(user) = users.into_iter().next() {
            return Ok(Some(user));
        }
    }

    Ok(None)
}

pub async fn get_beneficiary(
    cpf_cnpj: &str,
    store: &dyn ResourceStore,
) -> Result<Beneficiary, ApiError> {
    match find_user_by_cpf_cnpj(cpf_cnpj, store).await? {
        Some(user) => Ok(Beneficiary::from(&user)),
        None => Err(UsersApiError::BeneficiaryNotFound.value()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::{
        app::env::test_helpers::test_envy,
        store::memory::{sample_user, MemoryStore},
    };

    fn register_dto(email: &str, cpf_cnpj: &str) -> RegisterDto {
        RegisterDto {
            name: "Carla".to_string(),
            email: email.to_string(),
            password: "654321".to_string(),
            transaction_password: "4321".to_string(),
            cpf_cnpj: cpf_cnpj.to_string(),
        }
    }

    #[tokio::test]
    async fn registers_a_fresh_account() {
        let store = MemoryStore::new();

        let user = create_user(
            &register_dto("carla@example.com", "987.654.321-00"),
            &test_envy(),
            &store,
        )
        .await
        .unwrap();

        assert_eq!(user.cpf_cnpj, "98765432100");
        assert!(user.new_user);
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn rejects_taken_email_and_tax_id() {
        let store = MemoryStore::new().with_user(sample_user(1, "Ana", "12345678909", 0.0));

        let error = create_user(
            &register_dto("ana@example.com", "98765432100"),
            &test_envy(),
            &store,
        )
        .await
        .unwrap_err();
        assert_eq!(error.code, StatusCode::CONFLICT);

        let error = create_user(
            &register_dto("carla@example.com", "123.456.789-09"),
            &test_envy(),
            &store,
        )
        .await
        .unwrap_err();
        assert_eq!(error.code, StatusCode::CONFLICT);
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn login_matches_mixed_case_seeded_email() {
        let mut user = sample_user(1, "Ana", "12345678909", 0.0);
        user.email = "Ana@Example.com".to_string();
        let store = MemoryStore::new()
            .with_user(user)
            .with_user(sample_user(2, "Bruno", "98765432100", 0.0));

        let login = |email: &str| LoginDto {
            email: email.to_string(),
            password: "123456".to_string(),
        };

        let found = get_user_by_login_dto(&login("Ana@Example.com"), &store)
            .await
            .unwrap();
        assert_eq!(found.map(|user| user.name).as_deref(), Some("Ana"));

        let found = get_user_by_login_dto(&login("BRUNO@example.com"), &store)
            .await
            .unwrap();
        assert_eq!(found.map(|user| user.name).as_deref(), Some("Bruno"));
    }

    #[tokio::test]
    async fn finds_users_whose_text_id_has_leading_zeros() {
        let mut user = sample_user(1, "Ana", "12345678909", 0.0);
        user.id = ResourceId::Text("0042".to_string());
        let store = MemoryStore::new().with_user(user);

        let found = get_user_by_id(&ResourceId::parse("0042"), &store)
            .await
            .unwrap();

        assert_eq!(found.id.to_string(), "0042");
    }

    #[tokio::test]
    async fn beneficiary_lookup_accepts_masked_storage() {
        let store = MemoryStore::new().with_user(sample_user(2, "Bruno", "987.654.321-00", 0.0));

        let beneficiary = get_beneficiary("98765432100", &store).await.unwrap();
        assert_eq!(beneficiary.name, "Bruno");
        assert_eq!(beneficiary.cpf_cnpj, "987.654.321-00");

        let error = get_beneficiary("11122233344", &store).await.unwrap_err();
        assert_eq!(error.code, StatusCode::NOT_FOUND);
    }
}
