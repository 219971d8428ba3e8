use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::session::SessionClaims, errors::SessionError};

/// Extractor for the caller's verified session claims.
/// Returns 401 if the session gate did not admit the request.
/// Usage: add `session: Session` as a parameter to your handler function.
#[derive(Debug)]
pub struct Session(pub SessionClaims);

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionClaims>() {
            Some(claims) => ready(Ok(Session(claims.clone()))),
            None => ready(Err(SessionError::MissingCredentials.into())),
        }
    }
}
