// Create, read, update and delete through the HTTP surface.

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;
use time::Duration;

use crate::common::assert_problem_details;
use crate::support::auth::{bearer_header, mint_token};
use crate::support::{create_test_app, memory_state};

#[actix_web::test]
async fn task_lifecycle() {
    let app = create_test_app(memory_state().0).await;
    let auth = bearer_header(&mint_token(42, "alice", Duration::minutes(1)));

    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "name": "write report", "deadline": "2030-01-01T12:00:00Z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(created["creator_id"], 42);
    assert_eq!(created["completed"], false);
    let id = created["id"].as_str().expect("id is a string").to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/tasks/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "name": "write final report", "completed": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "write final report");
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["deadline"], created["deadline"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/tasks/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/tasks/{id}"))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::NOT_FOUND, "TASK_NOT_FOUND").await;
}

#[actix_web::test]
async fn create_rejects_blank_name_and_bad_deadline() {
    let app = create_test_app(memory_state().0).await;
    let auth = bearer_header(&mint_token(42, "alice", Duration::minutes(1)));

    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "name": "   ", "deadline": "2030-01-01T12:00:00Z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "INVALID_TASK_NAME").await;

    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "name": "report", "deadline": "tomorrow" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[actix_web::test]
async fn malformed_json_body_is_a_validation_error() {
    let app = create_test_app(memory_state().0).await;
    let auth = bearer_header(&mint_token(42, "alice", Duration::minutes(1)));

    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header(("Authorization", auth.clone()))
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name":"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header(("Authorization", auth))
        .insert_header(("content-type", "text/plain"))
        .set_payload(r#"{"name":"report","deadline":"2030-01-01T12:00:00Z"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}
