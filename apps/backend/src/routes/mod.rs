use actix_web::web;

use crate::state::AppState;

pub mod health;
pub mod tasks;
pub mod users;

/// Register every route.
///
/// `/tasks/**` is wrapped in the authorization gate built from the state's
/// token maker, so no task handler runs without a verified principal.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.configure(health::configure_routes);

    cfg.service(web::scope("/users").configure(users::configure_routes));

    cfg.service(
        web::scope("/tasks")
            .wrap(state.authorization_gate())
            .configure(tasks::configure_routes),
    );
}
