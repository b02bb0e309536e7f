//! In-memory repository for development and tests
//!
//! Mirrors the PostgreSQL schema rules: sequential ids, unique email,
//! newest-first listing.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: Vec<Credential>,
}

/// In-memory user store
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant or revoke the admin flag; there is no HTTP operation for this
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> bool {
        let mut store = self.store.write().await;
        match store.rows.iter_mut().find(|c| c.user.user_id == user_id) {
            Some(credential) => {
                credential.user.user_role = UserRole::from_is_admin(is_admin);
                true
            }
            None => false,
        }
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(
        &self,
        email: &Email,
        password_hash: Option<&UserPassword>,
    ) -> AuthResult<User> {
        let mut store = self.store.write().await;

        if store.rows.iter().any(|c| &c.user.email == email) {
            return Err(AuthError::EmailTaken);
        }

        store.last_id += 1;
        let user = User {
            user_id: UserId::new(store.last_id),
            email: email.clone(),
            user_role: UserRole::User,
            created_at: Utc::now(),
        };

        store.rows.push(Credential {
            user: user.clone(),
            password_hash: password_hash.cloned(),
        });

        Ok(user)
    }

    async fn find_credential_by_email(&self, email: &Email) -> AuthResult<Option<Credential>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|c| &c.user.email == email).cloned())
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .iter()
            .find(|c| c.user.user_id == user_id)
            .map(|c| c.user.clone()))
    }

    async fn list_all(&self) -> AuthResult<Vec<User>> {
        let store = self.store.read().await;
        let mut users: Vec<User> = store.rows.iter().map(|c| c.user.clone()).collect();
        users.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.user_id.cmp(&a.user_id))
        });
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryAuthRepository::new();
        let a = repo
            .create(&Email::new("a@example.com").unwrap(), None)
            .await
            .unwrap();
        let b = repo
            .create(&Email::new("b@example.com").unwrap(), None)
            .await
            .unwrap();

        assert_eq!(a.user_id, UserId::new(1));
        assert_eq!(b.user_id, UserId::new(2));
        assert!(!a.is_admin());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = InMemoryAuthRepository::new();
        let email = Email::new("dup@example.com").unwrap();
        repo.create(&email, None).await.unwrap();

        let err = repo.create(&email, None).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = InMemoryAuthRepository::new();
        for name in ["first", "second", "third"] {
            let email = Email::new(format!("{name}@example.com")).unwrap();
            repo.create(&email, None).await.unwrap();
        }

        let users = repo.list_all().await.unwrap();
        let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(
            emails,
            ["third@example.com", "second@example.com", "first@example.com"]
        );
    }

    #[tokio::test]
    async fn test_set_admin() {
        let repo = InMemoryAuthRepository::new();
        let user = repo
            .create(&Email::new("root@example.com").unwrap(), None)
            .await
            .unwrap();

        assert!(repo.set_admin(user.user_id, true).await);
        assert!(repo.find_by_id(user.user_id).await.unwrap().unwrap().is_admin());
        assert!(!repo.set_admin(UserId::new(99), true).await);
    }
}
