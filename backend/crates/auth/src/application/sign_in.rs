//! Sign In Use Case
//!
//! Verifies email and password and issues an access token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::credential::Credential;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed access token
    pub token: String,
}

/// Sign in use case
///
/// Every failure (malformed email, password outside policy, unknown email,
/// user without password, wrong password) is the same
/// `AuthError::InvalidCredentials`, so responses do not reveal which
/// emails are registered.
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let credential = self.repo.find_credential_by_email(&email).await?;

        // Unknown and password-less accounts still pay for one Argon2 run
        let pepper = self.config.password_pepper.clone();
        let verified = tokio::task::spawn_blocking(move || match credential {
            Some(Credential {
                user,
                password_hash: Some(password_hash),
            }) => password_hash
                .verify(&raw_password, pepper.as_deref())
                .then_some(user),
            _ => {
                raw_password.verify_decoy(pepper.as_deref());
                None
            }
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))?;

        let user = verified.ok_or(AuthError::InvalidCredentials)?;
        let token = self.tokens.issue(user.user_id, user.is_admin());

        tracing::info!(
            user_id = %user.user_id,
            is_admin = user.is_admin(),
            "User signed in"
        );

        Ok(SignInOutput { token })
    }
}
