use std::sync::Arc;

use sqlx::PgPool;

use crate::config::TokenConfig;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;
use crate::domain::services::token::TokenService;

use crate::services::account::AccountServiceImpl;
use crate::services::token::{Keys, TokenServiceImpl};

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub token_service: Arc<dyn TokenService>,
}

impl Container {
    pub fn new(pool: PgPool, token_config: &TokenConfig) -> Self {
        Container {
            account_service: account_service(pool),
            token_service: token_service(token_config),
        }
    }
}

fn account_service(pool: PgPool) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> = Arc::new(AccountRepositoryImpl::new(pool));

    Arc::new(AccountServiceImpl::new(account_repository))
}

fn token_service(token_config: &TokenConfig) -> Arc<dyn TokenService> {
    let keys = Keys::from_secret(token_config.secret.as_bytes());

    Arc::new(TokenServiceImpl::new(
        keys,
        token_config.expiration_seconds,
    ))
}
