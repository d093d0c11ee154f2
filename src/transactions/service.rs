use chrono::{DateTime, Utc};

use crate::{
    app::models::api_error::ApiError,
    store::{models::resource_id::ResourceId, ResourceStore},
    users::{
        self,
        dtos::edit_user_dto::EditUserDto,
        errors::UsersApiError,
        models::user::User,
    },
    AppState,
};

use super::{
    dtos::{
        deposit_dto::DepositDto, get_transactions_filter_dto::GetTransactionsFilterDto,
        transfer_dto::TransferDto,
    },
    enums::transfer_kind::TransferKind,
    errors::TransactionsApiError,
    models::{
        transaction::{NewTransaction, Transaction},
        transaction_receipt::TransactionReceipt,
    },
    util::{
        in_flight::InFlightGuard,
        money::{all_finite, round_cents},
    },
    RECENT_TRANSACTIONS,
};

pub async fn transfer(
    dto: &TransferDto,
    user_id: &ResourceId,
    state: &AppState,
) -> Result<TransactionReceipt, ApiError> {
    let Some(_guard) = InFlightGuard::acquire(&state.in_flight, &user_id.to_string()) else {
        return Err(TransactionsApiError::OperationInProgress.value());
    };
    let store = state.store.as_ref();
    let value = round_cents(dto.value);

    let sender = users::service::get_user_by_id(user_id, store).await?;

    if sender.balance < value {
        return Err(TransactionsApiError::InsufficientBalance.value());
    }
    if dto.transaction_password != sender.transaction_password {
        return Err(TransactionsApiError::InvalidTransactionPassword.value());
    }

    let Some(beneficiary) =
        users::service::find_user_by_cpf_cnpj(&dto.beneficiary_cpf_cnpj, store).await?
    else {
        return Err(UsersApiError::BeneficiaryNotFound.value());
    };

    if beneficiary.id == sender.id {
        return Err(TransactionsApiError::SelfTransfer.value());
    }
    if dto.kind == TransferKind::Ted && !dto.has_ted_details() {
        return Err(TransactionsApiError::MissingTedDetails.value());
    }

    let now = Utc::now();
    let sender_balance = round_cents(sender.balance - value);
    let beneficiary_balance = round_cents(beneficiary.balance + value);

    if !all_finite(&[value, sender_balance, beneficiary_balance]) {
        return Err(TransactionsApiError::InvalidAmount.value());
    }

    // BALANCES
    store
        .patch_user(&sender.id, &EditUserDto::balance(sender_balance))
        .await?;

    if let Err(e) = store
        .patch_user(&beneficiary.id, &EditUserDto::balance(beneficiary_balance))
        .await
    {
        restore_users(store, &[&sender]).await;
        return Err(e);
    }

    // RECORDS
    let debit = NewTransaction::transfer_debit(&sender, &beneficiary, dto, value, now);
    let debit = match store.create_transaction(&debit).await {
        Ok(transaction) => transaction,
        Err(e) => {
            restore_users(store, &[&sender, &beneficiary]).await;
            return Err(e);
        }
    };

    let credit = NewTransaction::transfer_credit(&sender, &beneficiary, dto, value, now);
    if let Err(e) = store.create_transaction(&credit).await {
        tracing::error!(debit_id = %debit.id, "credit record failed, debit record left behind");
        restore_users(store, &[&sender, &beneficiary]).await;
        return Err(e);
    }

    tracing::info!(
        sender_id = %sender.id,
        beneficiary_id = %beneficiary.id,
        kind = debit.transaction_type.value(),
        value,
        "transfer completed"
    );

    Ok(TransactionReceipt {
        transaction: debit,
        balance: sender_balance,
    })
}

pub async fn deposit(
    dto: &DepositDto,
    user_id: &ResourceId,
    state: &AppState,
) -> Result<TransactionReceipt, ApiError> {
    let Some(_guard) = InFlightGuard::acquire(&state.in_flight, &user_id.to_string()) else {
        return Err(TransactionsApiError::OperationInProgress.value());
    };
    let store = state.store.as_ref();
    let value = round_cents(dto.value);

    let user = users::service::get_user_by_id(user_id, store).await?;
    let balance = round_cents(user.balance + value);

    if !all_finite(&[value, balance]) {
        return Err(TransactionsApiError::InvalidAmount.value());
    }

    let edit = EditUserDto {
        balance: Some(balance),
        new_user: user.new_user.then_some(false),
    };
    store.patch_user(&user.id, &edit).await?;

    let transaction = match store
        .create_transaction(&NewTransaction::deposit(&user, value, Utc::now()))
        .await
    {
        Ok(transaction) => transaction,
        Err(e) => {
            restore_users(store, &[&user]).await;
            return Err(e);
        }
    };

    tracing::info!(user_id = %user.id, value, "deposit completed");

    Ok(TransactionReceipt {
        transaction,
        balance,
    })
}

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    user_id: &ResourceId,
    store: &dyn ResourceStore,
    now: DateTime<Utc>,
) -> Result<Vec<Transaction>, ApiError> {
    let mut transactions = store.find_transactions(user_id).await?;
    transactions.retain(|transaction| &transaction.user_id == user_id);

    dto.apply(transactions, now)
}

pub async fn get_recent_transactions(
    user_id: &ResourceId,
    store: &dyn ResourceStore,
) -> Result<Vec<Transaction>, ApiError> {
    let dto = GetTransactionsFilterDto {
        limit: Some(RECENT_TRANSACTIONS),
        ..Default::default()
    };

    get_transactions(&dto, user_id, store, Utc::now()).await
}

/// Best effort: writes back the pre-operation state of each user and logs
/// whatever could not be restored.
async fn restore_users(store: &dyn ResourceStore, users: &[&User]) {
    for user in users {
        match store.patch_user(&user.id, &EditUserDto::restore(user)).await {
            Ok(_) => tracing::warn!(user_id = %user.id, balance = user.balance, "balance restored"),
            Err(e) => tracing::error!(
                user_id = %user.id,
                balance = user.balance,
                message = %e.message,
                "failed to restore balance"
            ),
        }
    }
}
