//! Static credential store and the basic-auth gate.
//!
//! Every `/tasks` route is wrapped by [`require_basic_auth`], which rejects
//! requests before any handler logic runs — in particular before the JSON
//! body extractor touches the payload. Credentials are a fixed table parsed
//! once at startup; lookup is exact string equality.

use std::collections::HashMap;
use std::fmt;
use std::future::{Ready, ready};

use actix_web::body::MessageBody;
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{FromRequest, HttpMessage, HttpRequest, http::header, web};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};

use crate::config::ConfigError;
use crate::error::ApiError;
use crate::handlers::AppState;

/// Static username -> password table.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    /// Parse a `user1:pass1,user2:pass2,...` spec. A pair without exactly one
    /// `:` is a configuration error; a repeated username keeps the last pair.
    pub fn from_spec(spec: &str) -> Result<Self, ConfigError> {
        let mut users = HashMap::new();
        for pair in spec.split(',') {
            let parts: Vec<&str> = pair.split(':').collect();
            let [username, password] = parts[..] else {
                return Err(ConfigError {
                    field: "USER_CREDENTIALS".to_string(),
                    message: format!("Malformed credential pair '{}', expected user:pass", pair),
                });
            };
            users.insert(username.to_string(), password.to_string());
        }
        Ok(Self { users })
    }

    /// Exact-equality membership check. Returns the identity on a match.
    pub fn verify(&self, username: &str, password: &str) -> Option<&str> {
        self.users
            .get_key_value(username)
            .filter(|(_, stored)| stored.as_str() == password)
            .map(|(name, _)| name.as_str())
    }
}

/// Identity established by the auth gate, available to handlers via
/// request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

impl fmt::Display for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| ApiError::Unauthorized.into()),
        )
    }
}

/// Middleware guarding a scope with HTTP Basic authentication.
///
/// On missing or invalid credentials the request short-circuits with 401 and
/// a `WWW-Authenticate` challenge; the wrapped handler never runs.
pub async fn require_basic_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| {
            ApiError::InternalServerError("credential store not configured".to_string())
        })?
        .clone();

    match authenticate(&state.credentials, req.request()) {
        Some(user) => {
            req.extensions_mut().insert(user);
            next.call(req).await
        }
        None => {
            log::warn!("Unauthorized request to {}", req.path());
            Err(ApiError::Unauthorized.into())
        }
    }
}

/// Extract and verify `Authorization: Basic <base64(user:pass)>`.
fn authenticate(store: &CredentialStore, req: &HttpRequest) -> Option<AuthenticatedUser> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, payload) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = BASE64_STANDARD.decode(payload.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    store
        .verify(username, password)
        .map(|identity| AuthenticatedUser(identity.to_string()))
}
