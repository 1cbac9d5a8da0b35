//! Access log: one `request_completed` event per request.
//!
//! Besides the HTTP basics, each event names the session operation the route
//! serves and, for failures, the `ErrorCode` that `AppError` attached to the
//! response. Client errors log at `warn`, server errors at `error`.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{event, Level};

use crate::errors::ErrorCode;

/// Session operation served by `path`, for log grouping.
pub fn operation_for(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "/api/create" => "create_game",
        "/api/join" => "join_game",
        "/api/state" => "get_state",
        "/api/p1/answer" => "submit_answer",
        "/api/p2/guess" => "submit_guess",
        "/api/reset" => "reset_game",
        "/health" => "health",
        _ => "other",
    }
}

struct Completion {
    operation: &'static str,
    method: String,
    path: String,
    trace_id: String,
    status: StatusCode,
    error_code: Option<ErrorCode>,
    duration_us: u64,
}

macro_rules! request_completed {
    ($level:expr, $c:ident) => {
        event!(
            $level,
            operation = $c.operation,
            http.method = %$c.method,
            url.path = %$c.path,
            http.status_code = $c.status.as_u16(),
            error.code = $c.error_code.map_or("", |code| code.as_str()),
            duration_us = $c.duration_us,
            trace_id = %$c.trace_id,
            "request_completed"
        )
    };
}

impl Completion {
    fn log(&self) {
        let c = self;
        if c.status.is_server_error() {
            request_completed!(Level::ERROR, c);
        } else if c.status.is_client_error() {
            request_completed!(Level::WARN, c);
        } else {
            request_completed!(Level::INFO, c);
        }
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let path = req.path().to_string();
        let operation = operation_for(&path);
        let method = req.method().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, error_code) = match &result {
                Ok(res) => (
                    res.status(),
                    res.response().extensions().get::<ErrorCode>().copied(),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            Completion {
                operation,
                method,
                path,
                trace_id,
                status,
                error_code,
                duration_us: start.elapsed().as_micros() as u64,
            }
            .log();

            result
        })
    }
}
