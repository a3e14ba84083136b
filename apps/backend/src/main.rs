use actix_web::{web, App, HttpServer};
use tasks_backend::config::AppConfig;
use tasks_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger};
use tasks_backend::routes;
use tasks_backend::state::build_state;
use tasks_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Builds the token maker; a weak secret stops startup here.
    let app_state = match build_state().with_config(&config).build() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting tasks backend");

    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        let state = data.clone();
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, &state))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
