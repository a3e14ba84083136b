use actix_web::{web, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::entities::{TaskFilter, TaskUpdate};
use crate::error::AppError;
use crate::extractors::{Principal, TaskId, ValidatedJson, ValidatedQuery};
use crate::services::tasks::{self, Page};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateTaskRequest {
    pub name: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deadline: Option<OffsetDateTime>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListTasksQuery {
    pub name: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_deadline: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_deadline: Option<OffsetDateTime>,
    pub completed: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

async fn create_task(
    principal: Principal,
    body: ValidatedJson<CreateTaskRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreateTaskRequest { name, deadline } = body.into_inner();
    let task = tasks::create_task(app_state.tasks.as_ref(), &principal, name, deadline).await?;
    Ok(HttpResponse::Created().json(task))
}

async fn list_tasks(
    principal: Principal,
    query: ValidatedQuery<ListTasksQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let page = Page::new(query.page, query.limit)?;

    let filter = TaskFilter {
        name: query.name.filter(|name| !name.is_empty()),
        start_deadline: query.start_deadline,
        end_deadline: query.end_deadline,
        completed: query.completed,
        ..TaskFilter::for_creator(principal.user_id())
    };

    let found = tasks::list_tasks(app_state.tasks.as_ref(), &principal, filter, page).await?;
    Ok(HttpResponse::Ok().json(found))
}

async fn get_task(
    principal: Principal,
    task_id: TaskId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let task = tasks::fetch_owned_task(app_state.tasks.as_ref(), &task_id.0, &principal).await?;
    Ok(HttpResponse::Ok().json(task))
}

async fn update_task(
    principal: Principal,
    task_id: TaskId,
    body: ValidatedJson<UpdateTaskRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let UpdateTaskRequest {
        name,
        deadline,
        completed,
    } = body.into_inner();
    let update = TaskUpdate {
        name,
        deadline,
        completed,
    };

    let task = tasks::update_task(app_state.tasks.as_ref(), &task_id.0, &principal, update).await?;
    Ok(HttpResponse::Ok().json(task))
}

async fn delete_task(
    principal: Principal,
    task_id: TaskId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    tasks::delete_task(app_state.tasks.as_ref(), &task_id.0, &principal).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_task))
            .route(web::get().to(list_tasks)),
    );
    cfg.service(
        web::resource("/{task_id}")
            .route(web::get().to(get_task))
            .route(web::put().to(update_task))
            .route(web::delete().to(delete_task)),
    );
}
