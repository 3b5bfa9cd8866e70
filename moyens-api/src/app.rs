//! Application assembly: route table plus the global middleware stack.

use std::{any::Any, sync::Arc};

use axum::{
    Router,
    http::{HeaderValue, Method, Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
};
use axum_helmet::{Helmet, HelmetLayer};
use sea_orm::DatabaseConnection;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::{MakeSpan, TraceLayer},
};
use tracing::Span;

use crate::{
    catalog::SeaOrmCatalog,
    config::{AllowedOrigins, HttpConfig},
    errors::ApiError,
    routes::{self, SharedCatalog},
};

/// Builds the full service over a connected pool.
pub fn build_app(db: DatabaseConnection, http: &HttpConfig) -> Router {
    let catalog: SharedCatalog = Arc::new(SeaOrmCatalog::new(db));
    apply_middleware(routes::router(catalog), http)
}

/// Wraps `router` in the global middleware, outermost first:
/// tracing, CORS, secure headers, request timeout, panic recovery.
///
/// Request spans are parented to the span current at call time, so building
/// the app inside the `service` span tags every request event with it.
pub fn apply_middleware(router: Router, http: &HttpConfig) -> Router {
    let request_span = RequestSpan {
        parent: Span::current(),
    };

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.request_timeout,
        ))
        .layer(middleware::map_response(timeout_body))
        .layer(HelmetLayer::new(Helmet::default()))
        .layer(cors_layer(&http.allowed_origins))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Spawned connection tasks do not inherit the caller's span; this keeps
/// request spans attached to it anyway.
#[derive(Clone, Debug)]
struct RequestSpan {
    parent: Span,
}

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            parent: &self.parent,
            "request",
            method = %request.method(),
            uri = %request.uri(),
        )
    }
}

/// CORS for the configured origins. Only GET is routed, but the wider
/// method list is advertised to existing front-ends.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]);

    match origins {
        AllowedOrigins::Any => layer.allow_origin(AnyOrigin),
        AllowedOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(values)
        }
    }
}

// The timeout layer answers with an empty body; handlers never produce 408.
async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        ApiError::timeout("Délai de traitement de la requête dépassé").into_response()
    } else {
        response
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::internal("Erreur interne du serveur", Some(details)).into_response()
}
