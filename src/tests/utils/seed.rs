use crate::domain::models::account::{Account, NewAccount};
use crate::infrastructure::models::account::AccountRow;
use crate::services::account::encrypt_password;

use sqlx::PgPool;

pub const SEED_PASSWORD: &str = "p4ssw0rd";

/// Inserts one account directly into the store, bypassing the API.
pub async fn seed_account(pool: &PgPool) -> Account {
    let new_account = NewAccount::new(
        "Anna".to_string(),
        "Adler".to_string(),
        encrypt_password(SEED_PASSWORD).unwrap(),
    );

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
    .fetch_one(pool)
    .await
    .unwrap();

    row.into()
}
