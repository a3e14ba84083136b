// Listing is always scoped to the caller, filtered and paged.

use actix_web::http::StatusCode;
use actix_web::test;
use time::macros::datetime;
use time::Duration;

use crate::common::assert_problem_details;
use crate::support::auth::{bearer_header, mint_token};
use crate::support::factory::{seed_task, seed_task_due};
use crate::support::{create_test_app, memory_state};

async fn list_ids<S>(app: &S, uri: &str, token: &str) -> Vec<String>
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(("Authorization", bearer_header(token)))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    body.as_array()
        .expect("list response is an array")
        .iter()
        .map(|task| task["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[actix_web::test]
async fn list_only_returns_callers_tasks() {
    let (state, store) = memory_state();
    seed_task(store.as_ref(), "a-1", 42, "alice one").await;
    seed_task(store.as_ref(), "b-1", 43, "bob one").await;
    seed_task(store.as_ref(), "a-2", 42, "alice two").await;
    let app = create_test_app(state).await;

    let alice = mint_token(42, "alice", Duration::minutes(1));
    let mut ids = list_ids(&app, "/tasks", &alice).await;
    ids.sort();
    assert_eq!(ids, ["a-1", "a-2"]);
}

#[actix_web::test]
async fn list_orders_by_deadline_and_pages() {
    let (state, store) = memory_state();
    let base = datetime!(2030-01-01 00:00 UTC);
    for i in 0..7i64 {
        // Seeded in reverse deadline order.
        seed_task_due(
            store.as_ref(),
            &format!("t-{i}"),
            42,
            "task",
            base + Duration::days(7 - i),
        )
        .await;
    }
    let app = create_test_app(state).await;
    let alice = mint_token(42, "alice", Duration::minutes(1));

    let first = list_ids(&app, "/tasks", &alice).await;
    assert_eq!(first, ["t-6", "t-5", "t-4", "t-3", "t-2"]);

    let second = list_ids(&app, "/tasks?page=2", &alice).await;
    assert_eq!(second, ["t-1", "t-0"]);

    let sized = list_ids(&app, "/tasks?page=2&limit=3", &alice).await;
    assert_eq!(sized, ["t-3", "t-2", "t-1"]);
}

#[actix_web::test]
async fn list_applies_filters() {
    let (state, store) = memory_state();
    seed_task_due(store.as_ref(), "early", 42, "report draft", datetime!(2030-01-01 00:00 UTC)).await;
    seed_task_due(store.as_ref(), "late", 42, "report final", datetime!(2030-06-01 00:00 UTC)).await;
    seed_task_due(store.as_ref(), "other", 42, "groceries", datetime!(2030-03-01 00:00 UTC)).await;
    let app = create_test_app(state).await;
    let alice = mint_token(42, "alice", Duration::minutes(1));

    let by_name = list_ids(&app, "/tasks?name=report", &alice).await;
    assert_eq!(by_name, ["early", "late"]);

    let by_window = list_ids(
        &app,
        "/tasks?start_deadline=2030-02-01T00:00:00Z&end_deadline=2030-12-31T00:00:00Z",
        &alice,
    )
    .await;
    assert_eq!(by_window, ["other", "late"]);

    let done = list_ids(&app, "/tasks?completed=true", &alice).await;
    assert!(done.is_empty());
}

#[actix_web::test]
async fn list_rejects_bad_paging() {
    let app = create_test_app(memory_state().0).await;
    let alice = mint_token(42, "alice", Duration::minutes(1));

    for uri in ["/tasks?page=0", "/tasks?limit=0", "/tasks?limit=21"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", bearer_header(&alice)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, StatusCode::BAD_REQUEST, "INVALID_PAGINATION").await;
    }
}
