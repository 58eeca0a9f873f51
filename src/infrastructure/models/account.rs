use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::account::Account;

/// Row shape of the `accounts` table. The column is named
/// `encrypted_password` in the schema; the domain model calls it `password`.
#[derive(Debug, FromRow)]
pub struct AccountRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: String,
    pub encrypted_password: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            number: row.number,
            password: row.encrypted_password,
            balance: row.balance,
            created_at: row.created_at,
        }
    }
}
