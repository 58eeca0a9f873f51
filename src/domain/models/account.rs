use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A customer account. The `number` is the account's public handle; `id` is
/// the store-assigned primary key. `password` holds the argon2 hash and must
/// never reach a client.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: String,
    pub password: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

/// An account ready for insertion: the number and creation timestamp are
/// generated here, the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: String,
    pub password: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// `password` is already hashed by the caller.
    pub fn new(first_name: String, last_name: String, password: String) -> Self {
        NewAccount {
            first_name,
            last_name,
            number: Uuid::new_v4().to_string(),
            password,
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone)]
pub struct CreateAccount {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Clone)]
pub struct Credentials {
    pub number: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Transfer {
    pub to_account: String,
    pub amount: i64,
}
