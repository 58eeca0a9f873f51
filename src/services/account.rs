use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, CreateAccount, Credentials, NewAccount, Transfer},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn list(&self) -> AppResult<Vec<Account>> {
        Ok(self.repository.list().await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn create(&self, new_account: CreateAccount) -> AppResult<Account> {
        let password = encrypt_password(&new_account.password)?;

        let account = NewAccount::new(new_account.first_name, new_account.last_name, password);

        Ok(self.repository.create(account).await?)
    }

    async fn delete(&self, id: i64) -> AppResult<Option<i64>> {
        Ok(self.repository.delete(id).await?)
    }

    async fn login(&self, credentials: Credentials) -> AppResult<Account> {
        let account = match self.repository.find_by_number(&credentials.number).await? {
            Some(account) => account,
            None => return Err(AppError::Forbidden()),
        };

        verify_password(&credentials.password, &account.password)?;

        Ok(account)
    }

    async fn transfer(&self, transfer: Transfer) -> AppResult<Option<i64>> {
        Ok(self
            .repository
            .transfer(&transfer.to_account, transfer.amount)
            .await?)
    }
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}
