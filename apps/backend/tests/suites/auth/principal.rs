// The Principal extractor sees exactly what the gate verified.

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use serde_json::json;
use tasks_backend::middleware::RequestTrace;
use tasks_backend::{AppError, AuthorizationGate, Principal};
use time::Duration;

use crate::common::assert_problem_details;
use crate::support::auth::{bearer_header, mint_token, test_maker};

async fn whoami(principal: Principal) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "user_id": principal.user_id(),
        "username": principal.username,
        "token_id": principal.id,
    })))
}

#[actix_web::test]
async fn gated_handler_receives_verified_payload() {
    let maker = test_maker();
    let (token, payload) = tasks_backend::TokenMaker::create_token(
        maker.as_ref(),
        42,
        "alice",
        Duration::minutes(1),
    )
    .expect("mint");

    let app = test::init_service(
        App::new().wrap(RequestTrace).service(
            web::scope("/me")
                .wrap(AuthorizationGate::new(maker))
                .route("", web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], 42);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["token_id"], payload.id.to_string());
}

#[actix_web::test]
async fn custom_scheme_is_honoured() {
    let maker = test_maker();
    let token = mint_token(7, "carol", Duration::minutes(1));

    let app = test::init_service(
        App::new().wrap(RequestTrace).service(
            web::scope("/me")
                .wrap(AuthorizationGate::with_scheme(maker, "Token"))
                .route("", web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Token {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNSUPPORTED_AUTHORIZATION_TYPE",
    )
    .await;
}

#[actix_web::test]
async fn principal_outside_gate_is_unauthorized() {
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/open", web::get().to(whoami)),
    )
    .await;

    let token = mint_token(42, "alice", Duration::minutes(1));
    let req = test::TestRequest::get()
        .uri("/open")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}
