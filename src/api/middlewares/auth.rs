use crate::domain::error::AppError;
use crate::domain::models::account::Account;
use crate::domain::services::account::AccountService;
use crate::domain::services::token::TokenService;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{FutureExt, LocalBoxFuture};
use std::sync::Arc;

/// Guard for `/accounts/{id}` routes. Verifies the `x-jwt-token` header,
/// loads the account the path points at and checks that its number matches
/// the token's `sub` claim. Every failure mode collapses to the same 403 so
/// the cause is not disclosed to the client.
#[derive(Debug)]
pub struct RequireAccountToken {
    pub account: Account,
}

pub const TOKEN_HEADER: &str = "x-jwt-token";

fn get_token(req: &HttpRequest) -> Result<String, AppError> {
    match req.headers().get(TOKEN_HEADER) {
        Some(header) => Ok(header
            .to_str()
            .map_err(|_| AppError::Forbidden())?
            .trim()
            .to_string()),
        None => Err(AppError::Forbidden()),
    }
}

fn get_id(req: &HttpRequest) -> Result<i64, AppError> {
    req.match_info()
        .get("id")
        .and_then(|id| id.parse().ok())
        .ok_or_else(AppError::Forbidden)
}

impl FromRequest for RequireAccountToken {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<RequireAccountToken, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        async move {
            let token_service = req
                .app_data::<web::Data<Arc<dyn TokenService>>>()
                .ok_or_else(|| AppError::InternalError().trace("TokenService is not defined"))?;

            let account_service = req
                .app_data::<web::Data<Arc<dyn AccountService>>>()
                .ok_or_else(|| AppError::InternalError().trace("AccountService is not defined"))?;

            let token = get_token(&req)?;

            let claims = token_service
                .validate_token(&token)
                .map_err(|_| AppError::Forbidden())?;

            let id = get_id(&req)?;

            let account = account_service
                .find_by_id(id)
                .await
                .map_err(|_| AppError::Forbidden())?
                .ok_or_else(AppError::Forbidden)?;

            if account.number != claims.sub {
                return Err(AppError::Forbidden());
            }

            Ok(RequireAccountToken { account })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::StatusCode,
        test::{self, TestRequest},
        web,
    };
    use chrono::Utc;
    use tokio::sync::Mutex;

    use crate::infrastructure::repositories::account::mock::AccountRepositoryImpl;
    use crate::services::account::{AccountServiceImpl, encrypt_password};
    use crate::services::token::{Keys, TokenServiceImpl};

    use super::*;

    use rstest::*;

    async fn index(guard: RequireAccountToken) -> impl Responder {
        HttpResponse::Ok().json(guard.account.id)
    }

    fn account(id: i64, number: &str) -> Account {
        Account {
            id,
            first_name: "Anna".to_string(),
            last_name: "Adler".to_string(),
            number: number.to_string(),
            password: encrypt_password("p4ssw0rd").unwrap(),
            balance: 0,
            created_at: Utc::now(),
        }
    }

    #[fixture]
    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(TokenServiceImpl::new(Keys::from_secret(b"test-secret"), 60))
    }

    #[fixture]
    fn account_service() -> Arc<dyn AccountService> {
        let repo = Arc::new(AccountRepositoryImpl {
            accounts: Mutex::new(vec![account(1, "number-one"), account(2, "number-two")]),
        });
        Arc::new(AccountServiceImpl::new(repo))
    }

    async fn send_req(
        path: &str,
        token: Option<&str>,
        account_service: Arc<dyn AccountService>,
        token_service: Arc<dyn TokenService>,
    ) -> StatusCode {
        let app = test::init_service(
            App::new()
                .route("/accounts/{id}", web::get().to(index))
                .app_data(web::Data::new(account_service))
                .app_data(web::Data::new(token_service)),
        )
        .await;

        let mut req = TestRequest::get().uri(path);

        if let Some(token) = token {
            req = req.insert_header((TOKEN_HEADER, token));
        }

        let res = req.send_request(&app).await;

        res.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn test_missing_token(
        account_service: Arc<dyn AccountService>,
        token_service: Arc<dyn TokenService>,
    ) {
        assert_eq!(
            send_req("/accounts/1", None, account_service, token_service).await,
            StatusCode::FORBIDDEN
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn test_malformed_token(
        account_service: Arc<dyn AccountService>,
        token_service: Arc<dyn TokenService>,
    ) {
        assert_eq!(
            send_req(
                "/accounts/1",
                Some("eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzUxMiJ9"),
                account_service,
                token_service
            )
            .await,
            StatusCode::FORBIDDEN
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn test_matching_claim(
        account_service: Arc<dyn AccountService>,
        token_service: Arc<dyn TokenService>,
    ) {
        let token = token_service
            .generate_token("number-one".to_string())
            .unwrap();

        assert_eq!(
            send_req(
                "/accounts/1",
                Some(&token.token),
                account_service,
                token_service
            )
            .await,
            StatusCode::OK
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn test_number_mismatch(
        account_service: Arc<dyn AccountService>,
        token_service: Arc<dyn TokenService>,
    ) {
        let token = token_service
            .generate_token("number-one".to_string())
            .unwrap();

        assert_eq!(
            send_req(
                "/accounts/2",
                Some(&token.token),
                account_service,
                token_service
            )
            .await,
            StatusCode::FORBIDDEN
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn test_unknown_id(
        account_service: Arc<dyn AccountService>,
        token_service: Arc<dyn TokenService>,
    ) {
        let token = token_service
            .generate_token("number-one".to_string())
            .unwrap();

        assert_eq!(
            send_req(
                "/accounts/42",
                Some(&token.token),
                account_service,
                token_service
            )
            .await,
            StatusCode::FORBIDDEN
        );
    }
}
