use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    store::models::resource_id::ResourceId,
    transactions::{
        dtos::transfer_dto::TransferDto,
        enums::{transaction_type::TransactionType, transfer_kind::TransferKind},
    },
    users::models::user::User,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: ResourceId,
    pub user_id: ResourceId,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_cpf_cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl Transaction {
    pub fn label(&self) -> &'static str {
        if self.transaction_type == TransactionType::Deposit {
            return "Deposit";
        }

        match self.value < 0.0 {
            true => "Transfer sent",
            false => "Transfer received",
        }
    }
}

/// Body posted to the store; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: ResourceId,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: DateTime<Utc>,
    pub value: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_cpf_cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl NewTransaction {
    /// Debit side of a transfer, owned by the sender. TED records keep the
    /// bank details the sender typed.
    pub fn transfer_debit(
        sender: &User,
        beneficiary: &User,
        dto: &TransferDto,
        value: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let beneficiary_name = match dto.beneficiary_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => beneficiary.name.to_string(),
        };
        let is_ted = dto.kind == TransferKind::Ted;

        return Self {
            user_id: sender.id.clone(),
            transaction_type: dto.kind.transaction_type(),
            date,
            value: -value,
            description: format!("Transfer sent to {}", beneficiary_name),
            beneficiary_name: Some(beneficiary_name),
            beneficiary_cpf_cnpj: Some(beneficiary.cpf_cnpj.to_string()),
            bank: dto.bank.clone().filter(|_| is_ted),
            agency: dto.agency.clone().filter(|_| is_ted),
            account: dto.account.clone().filter(|_| is_ted),
        };
    }

    /// Credit side of a transfer, owned by the beneficiary. TED records carry
    /// the beneficiary's own stored bank details.
    pub fn transfer_credit(
        sender: &User,
        beneficiary: &User,
        dto: &TransferDto,
        value: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let is_ted = dto.kind == TransferKind::Ted;

        return Self {
            user_id: beneficiary.id.clone(),
            transaction_type: dto.kind.transaction_type(),
            date,
            value,
            description: format!("Transfer received from {}", sender.name),
            beneficiary_name: Some(sender.name.to_string()),
            beneficiary_cpf_cnpj: Some(sender.cpf_cnpj.to_string()),
            bank: beneficiary.bank.clone().filter(|_| is_ted),
            agency: beneficiary.agency.clone().filter(|_| is_ted),
            account: beneficiary.account.clone().filter(|_| is_ted),
        };
    }

    pub fn deposit(user: &User, value: f64, date: DateTime<Utc>) -> Self {
        return Self {
            user_id: user.id.clone(),
            transaction_type: TransactionType::Deposit,
            date,
            value,
            description: "Deposit into account".to_string(),
            beneficiary_name: None,
            beneficiary_cpf_cnpj: None,
            bank: None,
            agency: None,
            account: None,
        };
    }
}
