use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::auth::RequireAccountToken;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;
use crate::domain::services::token::TokenService;

use crate::api::dto::account::{
    AccountDTO, CreateAccountDTO, DeletedDTO, LoginDTO, LoginResponseDTO, TransferDTO,
    TransferResponseDTO,
};

use actix_web::{HttpResponse, delete, get, post, web::Data as State, web::Path};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(login)
        .service(get_accounts)
        .service(create_account)
        .service(get_account)
        .service(delete_account)
        .service(transfer);
}

#[utoipa::path(
    responses(
        (status = 200, body = LoginResponseDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = LoginDTO,
    tag = "Account"
)]
#[post("/login")]
pub async fn login(
    payload: Json<LoginDTO>,
    account_service: State<Arc<dyn AccountService>>,
    token_service: State<Arc<dyn TokenService>>,
) -> ApiResult {
    let login_dto = payload.into_inner();

    let account = account_service.login(login_dto.into()).await?;

    let access_token = token_service.generate_token(account.number.clone())?;

    Ok(HttpResponse::Ok().json(LoginResponseDTO {
        number: account.number,
        token: access_token.token,
    }))
}

#[utoipa::path(
    responses(
        (status = 200, body = [AccountDTO]),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account"
)]
#[get("/accounts")]
pub async fn get_accounts(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    let accounts = account_service.list().await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CreateAccountDTO,
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create_account(
    payload: Json<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account_dto = payload.into_inner();

    let created_account = account_service.create(account_dto.into()).await?;

    Ok(HttpResponse::Created().json(AccountDTO::from(created_account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("token" = [])),
    tag = "Account"
)]
#[get("/accounts/{id}")]
pub async fn get_account(guard: RequireAccountToken) -> ApiResult {
    Ok(HttpResponse::Ok().json(AccountDTO::from(guard.account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 204, body = DeletedDTO),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("token" = [])),
    tag = "Account"
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    guard: RequireAccountToken,
    path: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = path.into_inner();

    debug_assert_eq!(guard.account.id, id);

    match account_service.delete(id).await? {
        Some(deleted) => Ok(HttpResponse::NoContent().json(DeletedDTO { deleted })),
        None => Err(AppError::NotFound(format!("account {id} not found"))),
    }
}

#[utoipa::path(
    responses(
        (status = 200, body = TransferResponseDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = TransferDTO,
    tag = "Account"
)]
#[post("/transfer")]
pub async fn transfer(
    payload: Json<TransferDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let transfer_dto = payload.into_inner();
    let (to_account, amount) = (transfer_dto.to_account.clone(), transfer_dto.amount);

    match account_service.transfer(transfer_dto.into()).await? {
        Some(_) => Ok(HttpResponse::Ok().json(TransferResponseDTO {
            transfered: amount,
            to: to_account,
        })),
        None => Err(AppError::NotFound(format!(
            "account {to_account} not found"
        ))),
    }
}
