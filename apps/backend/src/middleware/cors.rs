use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware from `CORS_ALLOWED_ORIGINS` (comma-separated).
///
/// Empty, `null` and non-http(s) entries are ignored; with nothing valid
/// configured only localhost origins are allowed.
pub fn cors_middleware() -> Cors {
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();
    cors_for_origins(&allowed_raw)
}

fn parse_origins(raw: &str) -> Vec<String> {
    let allowed: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    if allowed.is_empty() {
        vec![
            "http://localhost:5000".to_string(),
            "http://127.0.0.1:5000".to_string(),
        ]
    } else {
        allowed
    }
}

fn cors_for_origins(raw: &str) -> Cors {
    let mut cors = Cors::default()
        // The API is POST + JSON, plus the GET health check
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in parse_origins(raw) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
