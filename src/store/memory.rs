use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use crate::{
    app::models::api_error::ApiError,
    transactions::models::transaction::{NewTransaction, Transaction},
    users::{
        dtos::{edit_user_dto::EditUserDto, get_users_filter_dto::GetUsersFilterDto},
        models::user::{NewUser, User},
    },
};

use super::{errors::StoreApiError, models::resource_id::ResourceId, ResourceStore};

/// In-process stand-in for the resource store. Writes are numbered from zero
/// so a test can make one specific write fail.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    transactions: Mutex<Vec<Transaction>>,
    next_id: AtomicU64,
    writes: AtomicUsize,
    failing_write: Mutex<Option<usize>>,
    unreachable: Mutex<bool>,
}

pub fn sample_user(id: u64, name: &str, cpf_cnpj: &str, balance: f64) -> User {
    User {
        id: ResourceId::Number(id),
        email: [&name.to_lowercase(), "@example.com"].concat(),
        password: "123456".to_string(),
        name: name.to_string(),
        cpf_cnpj: cpf_cnpj.to_string(),
        bank: Some("Banco Demo".to_string()),
        agency: Some("0001".to_string()),
        account: Some(format!("{:08}", id)),
        balance,
        transaction_password: "1234".to_string(),
        new_user: false,
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(100),
            ..Default::default()
        }
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    pub fn with_transaction(self, transaction: Transaction) -> Self {
        self.transactions.lock().unwrap().push(transaction);
        self
    }

    /// The `index`-th write attempt (zero based) fails as if the store were down.
    pub fn fail_write(&self, index: usize) {
        *self.failing_write.lock().unwrap() = Some(index);
    }

    /// Every call fails as if the store were down.
    pub fn go_offline(&self) {
        *self.unreachable.lock().unwrap() = true;
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn user(&self, id: u64) -> Option<User> {
        let id = ResourceId::Number(id);

        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    pub fn transactions_of(&self, id: u64) -> Vec<Transaction> {
        let id = ResourceId::Number(id);

        self.transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|transaction| transaction.user_id == id)
            .cloned()
            .collect()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        match *self.unreachable.lock().unwrap() {
            true => Err(StoreApiError::Unreachable.value()),
            false => Ok(()),
        }
    }

    fn begin_write(&self) -> Result<(), ApiError> {
        self.check_online()?;

        let index = self.writes.fetch_add(1, Ordering::SeqCst);
        if *self.failing_write.lock().unwrap() == Some(index) {
            return Err(StoreApiError::Unreachable.value());
        }

        Ok(())
    }

    fn next_id(&self) -> ResourceId {
        ResourceId::Number(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

fn stored(new_transaction: &NewTransaction, id: ResourceId) -> Transaction {
    let new_transaction = new_transaction.clone();

    Transaction {
        id,
        user_id: new_transaction.user_id,
        transaction_type: new_transaction.transaction_type,
        date: new_transaction.date,
        value: new_transaction.value,
        description: Some(new_transaction.description),
        beneficiary_name: new_transaction.beneficiary_name,
        beneficiary_cpf_cnpj: new_transaction.beneficiary_cpf_cnpj,
        bank: new_transaction.bank,
        agency: new_transaction.agency,
        account: new_transaction.account,
    }
}

fn matches(dto: &GetUsersFilterDto, user: &User) -> bool {
    dto.email.as_ref().map_or(true, |email| &user.email == email)
        && dto
            .password
            .as_ref()
            .map_or(true, |password| &user.password == password)
        && dto
            .cpf_cnpj
            .as_ref()
            .map_or(true, |cpf_cnpj| &user.cpf_cnpj == cpf_cnpj)
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn find_users(&self, dto: &GetUsersFilterDto) -> Result<Vec<User>, ApiError> {
        self.check_online()?;

        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|user| matches(dto, user))
            .cloned()
            .collect())
    }

    async fn get_user(&self, id: &ResourceId) -> Result<Option<User>, ApiError> {
        self.check_online()?;

        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.id == id)
            .cloned())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.begin_write()?;

        let user = User {
            id: self.next_id(),
            email: new_user.email.to_string(),
            password: new_user.password.to_string(),
            name: new_user.name.to_string(),
            cpf_cnpj: new_user.cpf_cnpj.to_string(),
            bank: Some(new_user.bank.to_string()),
            agency: Some(new_user.agency.to_string()),
            account: Some(new_user.account.to_string()),
            balance: new_user.balance,
            transaction_password: new_user.transaction_password.to_string(),
            new_user: new_user.new_user,
        };
        self.users.lock().unwrap().push(user.clone());

        Ok(user)
    }

    async fn patch_user(&self, id: &ResourceId, dto: &EditUserDto) -> Result<User, ApiError> {
        self.begin_write()?;

        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|user| &user.id == id) else {
            return Err(StoreApiError::UnexpectedStatus.value());
        };

        if let Some(balance) = dto.balance {
            user.balance = balance;
        }
        if let Some(new_user) = dto.new_user {
            user.new_user = new_user;
        }

        Ok(user.clone())
    }

    async fn find_transactions(&self, user_id: &ResourceId) -> Result<Vec<Transaction>, ApiError> {
        self.check_online()?;

        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|transaction| &transaction.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        self.begin_write()?;

        let transaction = stored(new_transaction, self.next_id());
        self.transactions.lock().unwrap().push(transaction.clone());

        Ok(transaction)
    }
}
