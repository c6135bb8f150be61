use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// Logs one line per request with method, route, status and duration.
///
/// The route is the matched pattern (`/questions/{question_id}`), so
/// question and answer ids stay out of request logs.
pub struct StructuredLogger;

const UNMATCHED_ROUTE: &str = "<unmatched>";

fn route_of<B>(result: &Result<ServiceResponse<B>, ActixError>) -> String {
    result
        .as_ref()
        .ok()
        .and_then(|res| res.request().match_pattern())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

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
        let method = req.method().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let route = route_of(&result);

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            let status_code = status.as_u16();
            let duration_us = start.elapsed().as_micros() as u64;

            if status.is_server_error() {
                error!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, "request_completed");
            } else if status.is_client_error() {
                warn!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, "request_completed");
            } else {
                info!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, "request_completed");
            }

            result
        })
    }
}
