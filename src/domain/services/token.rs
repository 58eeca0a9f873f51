use crate::domain::{
    error::AppResult,
    models::token::{AccessToken, Claims},
};

pub trait TokenService: 'static + Sync + Send {
    fn generate_token(&self, number: String) -> AppResult<AccessToken>;
    fn validate_token(&self, token: &str) -> AppResult<Claims>;
}
