use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, CreateAccount, Credentials, Transfer};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn list(&self) -> AppResult<Vec<Account>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>>;
    async fn create(&self, new_account: CreateAccount) -> AppResult<Account>;
    async fn delete(&self, id: i64) -> AppResult<Option<i64>>;
    async fn login(&self, credentials: Credentials) -> AppResult<Account>;
    /// Credits the destination account only; see `AccountRepository::transfer`.
    async fn transfer(&self, transfer: Transfer) -> AppResult<Option<i64>>;
}
