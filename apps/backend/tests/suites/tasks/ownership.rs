// Ownership checks on single-task routes.

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;
use time::Duration;

use crate::common::assert_problem_details;
use crate::support::auth::{bearer_header, mint_token};
use crate::support::factory::seed_task;
use crate::support::{create_test_app, memory_state};

#[actix_web::test]
async fn owner_reads_task_and_stranger_is_refused() {
    let (state, store) = memory_state();
    seed_task(store.as_ref(), "t-42", 42, "owned by alice").await;
    seed_task(store.as_ref(), "t-43", 43, "owned by bob").await;
    let app = create_test_app(state).await;

    let token = mint_token(42, "alice", Duration::minutes(1));

    let req = test::TestRequest::get()
        .uri("/tasks/t-42")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let task: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(task["creator_id"], 42);

    let req = test::TestRequest::get()
        .uri("/tasks/t-43")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "NOT_OWNER").await;
}

#[actix_web::test]
async fn missing_task_is_not_found_before_ownership() {
    let app = create_test_app(memory_state().0).await;
    let token = mint_token(42, "alice", Duration::minutes(1));

    let req = test::TestRequest::get()
        .uri("/tasks/does-not-exist")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, StatusCode::NOT_FOUND, "TASK_NOT_FOUND").await;
}

#[actix_web::test]
async fn stranger_cannot_update_or_delete() {
    let (state, store) = memory_state();
    seed_task(store.as_ref(), "t-43", 43, "owned by bob").await;
    let app = create_test_app(state).await;

    let token = mint_token(42, "alice", Duration::minutes(1));

    let req = test::TestRequest::put()
        .uri("/tasks/t-43")
        .insert_header(("Authorization", bearer_header(&token)))
        .set_json(json!({ "completed": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "NOT_OWNER").await;

    let req = test::TestRequest::delete()
        .uri("/tasks/t-43")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "NOT_OWNER").await;

    // Bob's task is untouched.
    let bob = mint_token(43, "bob", Duration::minutes(1));
    let req = test::TestRequest::get()
        .uri("/tasks/t-43")
        .insert_header(("Authorization", bearer_header(&bob)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let task: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(task["completed"], false);
}

#[actix_web::test]
async fn expired_token_never_reaches_ownership_check() {
    let (state, store) = memory_state();
    seed_task(store.as_ref(), "t-43", 43, "owned by bob").await;
    let app = create_test_app(state).await;

    let token = mint_token(42, "alice", Duration::minutes(-5));
    let req = test::TestRequest::get()
        .uri("/tasks/t-43")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "EXPIRED_TOKEN").await;
}
