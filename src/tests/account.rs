use actix_web::http::StatusCode;
use rstest::*;
use serde::Deserialize;
use serde_json::json;

use crate::tests::utils::seed::{SEED_PASSWORD, seed_account};
use crate::tests::{Error, TestContext, context, request_token};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

// deny_unknown_fields doubles as the check that the password hash never
// shows up in a response.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    id: i64,
    first_name: String,
    #[allow(dead_code)]
    last_name: String,
    number: String,
    balance: i64,
    #[allow(dead_code)]
    created_at: String,
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_create_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/accounts")
        .set_json(json!({
            "first_name": "Anna",
            "last_name": "Adler",
            "password": "stR0ngP4ssw0rd!",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);

    let acc: Account = test::read_body_json(res).await;

    assert_eq!(acc.first_name, "Anna");
    assert_eq!(acc.balance, 0);
    assert!(!acc.number.is_empty());

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_repeated_creations_yield_distinct_numbers(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let mut numbers = Vec::new();

    for _ in 0..3 {
        let res = TestRequest::post()
            .uri("/accounts")
            .set_json(json!({
                "first_name": "Anna",
                "last_name": "Adler",
                "password": "stR0ngP4ssw0rd!",
            }))
            .send_request(&app)
            .await;

        let acc: Account = test::read_body_json(res).await;
        numbers.push(acc.number);
    }

    numbers.sort();
    numbers.dedup();
    assert_eq!(numbers.len(), 3);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_login_and_get_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.pool).await;

    let token = request_token(&app, &account.number, SEED_PASSWORD).await;

    let res = TestRequest::get()
        .uri(&format!("/accounts/{}", account.id))
        .insert_header(("x-jwt-token", token))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let acc: Account = test::read_body_json(res).await;

    assert_eq!(acc.id, account.id);
    assert_eq!(acc.number, account.number);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_login_wrong_password(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.pool).await;

    let res = TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "number": account.number,
            "password": "wrongpassword",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 403);
    assert_eq!(err.message, "permission denied");

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_tampered_token(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.pool).await;

    let token = request_token(&app, &account.number, SEED_PASSWORD).await;

    // Flip a character in the signature part.
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let res = TestRequest::get()
        .uri(&format!("/accounts/{}", account.id))
        .insert_header(("x-jwt-token", tampered))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 403);
    assert_eq!(err.message, "permission denied");

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_delete_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.pool).await;

    let token = request_token(&app, &account.number, SEED_PASSWORD).await;

    let res = TestRequest::delete()
        .uri(&format!("/accounts/{}", account.id))
        .insert_header(("x-jwt-token", token))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = TestRequest::get().uri("/accounts").send_request(&app).await;

    let accounts: Vec<Account> = test::read_body_json(res).await;
    assert!(accounts.is_empty());

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_delete_without_token(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.pool).await;

    let res = TestRequest::delete()
        .uri(&format!("/accounts/{}", account.id))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_transfer(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.pool).await;

    let res = TestRequest::post()
        .uri("/transfer")
        .set_json(json!({
            "to_account": account.number,
            "amount": 250,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;

    assert_eq!(body["transfered"], 250);
    assert_eq!(body["to"], *account.number);

    let res = TestRequest::get().uri("/accounts").send_request(&app).await;

    let accounts: Vec<Account> = test::read_body_json(res).await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].balance, 250);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_transfer_unknown_number(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/transfer")
        .set_json(json!({
            "to_account": "no-such-number",
            "amount": 250,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let _ = context.db.container.stop().await;
}
