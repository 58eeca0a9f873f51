use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::account::{Account, NewAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::models::account::AccountRow;

pub struct AccountRepositoryImpl {
    pool: PgPool,
}

impl AccountRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn list(&self) -> RepositoryResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_number(&self, number: &str) -> RepositoryResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE number = $1")
            .bind(number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_account: NewAccount) -> RepositoryResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts \
             (first_name, last_name, number, encrypted_password, balance, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(&new_account.number)
        .bind(&new_account.password)
        .bind(new_account.balance)
        .bind(new_account.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<Option<i64>> {
        let deleted: Option<(i64,)> =
            sqlx::query_as("DELETE FROM accounts WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(deleted.map(|(id,)| id))
    }

    async fn transfer(&self, number: &str, amount: i64) -> RepositoryResult<Option<i64>> {
        // Single statement, so the increment is atomic at the database layer.
        let credited: Option<(i64,)> = sqlx::query_as(
            "UPDATE accounts SET balance = balance + $1 WHERE number = $2 RETURNING id",
        )
        .bind(amount)
        .bind(number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credited.map(|(id,)| id))
    }
}
