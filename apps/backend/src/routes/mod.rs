use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. Middleware is applied by the caller (`main.rs`
/// wraps the app; tests may wrap it the same way or not at all).
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: GET /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Session operations: POST /api/**
    cfg.service(web::scope("/api").configure(games::configure_routes));
}
