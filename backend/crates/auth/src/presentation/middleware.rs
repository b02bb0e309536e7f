//! Auth Middleware
//!
//! The access gate in front of protected routes:
//! `Authorization` header → token validation → optional admin check →
//! [`Identity`] inserted into the request extensions.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::value_object::identity::Identity;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Authenticated,
    Admin,
}

/// Middleware state
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    fn admit(&self, headers: &HeaderMap, access: Access) -> AuthResult<Identity> {
        let token = extract_bearer_token(headers).ok_or(AuthError::AuthorizationRequired)?;
        let identity = self.tokens.validate(&token)?;

        if access == Access::Admin && !identity.is_admin {
            tracing::debug!(user_id = %identity.user_id, "Admin check failed");
            return Err(AuthError::AdminRequired);
        }

        Ok(identity)
    }
}

/// Middleware that requires a valid access token
pub async fn require_auth(
    State(gate): State<AuthGate>,
    req: Request,
    next: Next,
) -> AuthResult<Response> {
    run_gated(&gate, Access::Authenticated, req, next).await
}

/// Middleware that requires a valid access token with the admin flag
pub async fn require_admin(
    State(gate): State<AuthGate>,
    req: Request,
    next: Next,
) -> AuthResult<Response> {
    run_gated(&gate, Access::Admin, req, next).await
}

async fn run_gated(
    gate: &AuthGate,
    access: Access,
    mut req: Request,
    next: Next,
) -> AuthResult<Response> {
    let identity = gate.admit(req.headers(), access)?;
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Identity of the caller, as admitted by [`require_auth`] or [`require_admin`]
///
/// Rejects with 401 when the route is not behind the gate.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .copied()
            .map(CurrentUser)
            .ok_or(AuthError::IdentityMissing)
    }
}
