//! Request authentication.
//!
//! Credentials travel in the `Authorization` header as `Bearer <token>` or
//! `Token <token>`. An [`Authenticator`] asks each configured
//! [`CredentialValidator`] in turn; handlers opt in by taking an
//! [`AuthenticatedUser`] argument.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::state::AppState;

const CREDENCIALES_AUSENTES: &str = "Las credenciales de autenticación no se proveyeron";
const CREDENCIALES_INVALIDAS: &str = "Credenciales inválidas";

/// Identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
}

/// Something that can vouch for a raw credential.
pub trait CredentialValidator: Send + Sync {
    /// `Some(principal)` if the token is accepted.
    fn validate(&self, token: &str) -> Option<Principal>;
}

/// Allow-list of opaque API tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenValidator {
    tokens: HashSet<String>,
}

impl StaticTokenValidator {
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl CredentialValidator for StaticTokenValidator {
    fn validate(&self, token: &str) -> Option<Principal> {
        self.tokens.contains(token).then(|| Principal {
            subject: "api-token".to_string(),
        })
    }
}

/// Claims carried by accepted JWTs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// HS256 JWTs signed with a shared secret.
#[derive(Clone)]
pub struct JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl CredentialValidator for JwtValidator {
    fn validate(&self, token: &str) -> Option<Principal> {
        match decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => Some(Principal {
                subject: data.claims.sub,
            }),
            Err(e) => {
                tracing::debug!("JWT rejected: {}", e);
                None
            }
        }
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// Accepts the `Bearer` and `Token` schemes, case-insensitively.
pub fn extract_token(header_value: &str) -> Option<&str> {
    let mut parts = header_value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token") {
        Some(token)
    } else {
        None
    }
}

/// Ordered set of validators plus the create-endpoint policy.
///
/// With no validators every protected request is rejected.
#[derive(Clone, Default)]
pub struct Authenticator {
    validators: Vec<Arc<dyn CredentialValidator>>,
    require_for_create: bool,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validator(mut self, validator: impl CredentialValidator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn require_for_create(mut self, required: bool) -> Self {
        self.require_for_create = required;
        self
    }

    /// Build from `AUTH_TOKENS`, `AUTH_JWT_SECRET` and `AUTH_REQUIRE_FOR_CREATE`.
    pub fn from_env() -> Self {
        let mut auth = Self::new();

        if let Ok(raw) = std::env::var("AUTH_TOKENS") {
            let tokens = StaticTokenValidator::new(raw.split(',').map(str::trim));
            if !tokens.is_empty() {
                auth = auth.with_validator(tokens);
            }
        }

        if let Ok(secret) = std::env::var("AUTH_JWT_SECRET") {
            if !secret.is_empty() {
                auth = auth.with_validator(JwtValidator::new(secret.as_bytes()));
            }
        }

        let require_for_create = std::env::var("AUTH_REQUIRE_FOR_CREATE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if auth.validators.is_empty() {
            tracing::warn!(
                "No credential validators configured; protected endpoints will reject every request"
            );
        }

        auth.require_for_create(require_for_create)
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    pub fn create_requires_auth(&self) -> bool {
        self.require_for_create
    }

    /// Authenticate a request from its headers.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AppError> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_token)
            .ok_or_else(|| AppError::Unauthorized(CREDENCIALES_AUSENTES.to_string()))?;

        self.validators
            .iter()
            .find_map(|v| v.validate(token))
            .ok_or_else(|| AppError::Unauthorized(CREDENCIALES_INVALIDAS.to_string()))
    }
}

/// Extractor that rejects the request with 401 unless it authenticates.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.auth.authenticate(&parts.headers).map(AuthenticatedUser)
    }
}
