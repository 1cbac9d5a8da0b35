use actix_web::{web, App, HttpServer};
use knowme_backend::config::AppConfig;
use knowme_backend::middleware::cors::cors_middleware;
use knowme_backend::middleware::request_trace::RequestTrace;
use knowme_backend::middleware::structured_logger::StructuredLogger;
use knowme_backend::middleware::trace_span::TraceSpan;
use knowme_backend::routes;
use knowme_backend::services::spawn_session_reaper;
use knowme_backend::state::app_state::AppState;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Logging is configured from the environment too, so config errors go to stderr
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(&config);

    let host = config.host.clone();
    let port = config.port;
    let ttl = config.session_ttl;
    let sweep_interval = config.sweep_interval;

    let app_state = AppState::new(config);

    // Sessions live in memory only; expiry keeps abandoned ones from piling up
    let _reaper = ttl.map(|ttl| spawn_session_reaper(app_state.store(), ttl, sweep_interval));

    info!(
        %host,
        port,
        default_edition = %app_state.config.default_edition,
        expiry = ttl.is_some(),
        "starting knowme backend"
    );
    println!("🚀 Starting KnowMe backend on http://{}:{}", host, port);

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
