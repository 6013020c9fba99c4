use std::future::{ready, Ready};

use actix_web::{dev::ServiceRequest, web, FromRequest, HttpMessage, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::auth::session::SessionManager;
use crate::types::error::AppError;

/// Bearer validator for HttpAuthentication on protected scopes. On success
/// the resolved user record rides in the request extensions.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let sessions = match req.app_data::<web::Data<SessionManager>>() {
        Some(sessions) => sessions.clone(),
        None => {
            return Err((
                AppError::Internal("session manager not configured".to_string()).into(),
                req,
            ))
        }
    };
    match sessions.authenticate(credentials.token()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// The user record resolved by the guard, available to handlers for the
/// duration of the request only.
pub struct AuthedUser(pub entity::user::Model);

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<entity::user::Model>()
                .cloned()
                .map(AuthedUser)
                .ok_or(AppError::Unauthorized),
        )
    }
}
