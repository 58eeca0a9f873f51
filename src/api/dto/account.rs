use crate::domain::models::account::{Account, CreateAccount, Credentials, Transfer};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

/// Client view of an account. The password hash is deliberately absent.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: i64,
    first_name: String,
    last_name: String,
    #[schema(examples("8f5b6c1e-3d2a-4f7b-9c0d-1e2f3a4b5c6d"))]
    number: String,
    balance: i64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[schema(examples("Anna"))]
    pub first_name: String,

    #[schema(examples("Adler"))]
    pub last_name: String,

    #[schema(examples("hunter2"))]
    pub password: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct LoginDTO {
    #[schema(examples("8f5b6c1e-3d2a-4f7b-9c0d-1e2f3a4b5c6d"))]
    pub number: String,

    #[schema(examples("hunter2"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponseDTO {
    pub number: String,
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub token: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct TransferDTO {
    #[schema(examples("8f5b6c1e-3d2a-4f7b-9c0d-1e2f3a4b5c6d"))]
    pub to_account: String,

    #[schema(examples(250))]
    pub amount: i64,
}

/// The wire field is spelled `transfered`; clients depend on it.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferResponseDTO {
    pub transfered: i64,
    pub to: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedDTO {
    pub deleted: i64,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            first_name: val.first_name,
            last_name: val.last_name,
            number: val.number,
            balance: val.balance,
            created_at: val.created_at,
        }
    }
}

impl From<CreateAccountDTO> for CreateAccount {
    fn from(create_account: CreateAccountDTO) -> Self {
        CreateAccount {
            first_name: create_account.first_name,
            last_name: create_account.last_name,
            password: create_account.password,
        }
    }
}

impl From<LoginDTO> for Credentials {
    fn from(login: LoginDTO) -> Self {
        Credentials {
            number: login.number,
            password: login.password,
        }
    }
}

impl From<TransferDTO> for Transfer {
    fn from(transfer: TransferDTO) -> Self {
        Transfer {
            to_account: transfer.to_account,
            amount: transfer.amount,
        }
    }
}
