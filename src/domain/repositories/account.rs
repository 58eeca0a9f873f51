use async_trait::async_trait;

use crate::domain::models::account::{Account, NewAccount};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Account>>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Account>>;
    async fn find_by_number(&self, number: &str) -> RepositoryResult<Option<Account>>;
    async fn create(&self, new_account: NewAccount) -> RepositoryResult<Account>;
    /// Returns the deleted id, or `None` when no row matched.
    async fn delete(&self, id: i64) -> RepositoryResult<Option<i64>>;
    /// Credits `amount` onto the account with the given number in a single
    /// statement and returns its id, or `None` when the number is unknown.
    /// No source account is debited.
    async fn transfer(&self, number: &str, amount: i64) -> RepositoryResult<Option<i64>>;
}
