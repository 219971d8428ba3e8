use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, ResponseError,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{auth::session::SessionService, errors::SessionError};

/// The authorization boundary. Reads in the portfolio namespace pass
/// through untouched; every other request must carry a valid session
/// token, which is verified and its claims stored in request extensions
/// before any handler runs.
pub struct SessionGate;

impl<S> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGateService {
            service: Rc::new(service),
        })
    }
}

pub struct SessionGateService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for SessionGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if is_public_route(req.path(), req.method().as_str()) {
                return service.call(req).await;
            }

            let sessions = match req.app_data::<web::Data<SessionService>>() {
                Some(sessions) => sessions.clone(),
                None => {
                    tracing::error!("SessionService missing in middleware");
                    return Ok(deny(req, &SessionError::MissingSessionService));
                }
            };

            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    tracing::warn!("Missing or malformed Authorization header");
                    return Ok(deny(req, &SessionError::MissingCredentials));
                }
            };

            let claims = match sessions.decode(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    tracing::warn!("Session token rejected: {}", e);
                    return Ok(deny(req, &e));
                }
            };

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}

fn is_public_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return true;
    }
    if method != "GET" && method != "HEAD" {
        return false;
    }

    matches!(path, "/" | "/health") || path.starts_with("/api/v1/portfolio")
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn deny(req: ServiceRequest, err: &SessionError) -> ServiceResponse<BoxBody> {
    req.into_response(err.error_response())
}
