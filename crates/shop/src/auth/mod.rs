//! # Auth Service
//!
//! Registration with email activation, credential checks, and account removal.
//!
//! ```text
//! register ──▶ inactive (token issued, link mailed)
//!                 │ activate(token)
//!                 ▼
//!              active ──▶ validate_credentials succeeds
//! ```
//!
//! Passwords are stored as argon2 PHC strings. The activation link is
//! `{api_url}/activate/{token}`, and a successful activation redirects to
//! `{api_url}/auth/login`.

mod error;
pub mod mailer;
pub mod password;

pub use error::AuthError;
pub use mailer::{ActivationMailer, LogMailer, MailError, SentMail};

use crate::clients::UserClient;
use crate::model::{UserCreate, UserId, UserSummary};
use actor_framework::ActorClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

/// Registration request.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationConfirmation {
    pub user: UserSummary,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationConfirmation {
    pub user: UserSummary,
    pub redirect_to: String,
}

pub struct AuthService<M> {
    users: UserClient,
    mailer: M,
    api_url: String,
    // Serialises the uniqueness check with the insert.
    registration: Arc<Mutex<()>>,
}

impl<M: ActivationMailer> AuthService<M> {
    pub fn new(users: UserClient, mailer: M, api_url: impl Into<String>) -> Self {
        Self {
            users,
            mailer,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            registration: Arc::default(),
        }
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Returns the user if the password matches and the account is active.
    #[instrument(skip(self, password))]
    pub async fn validate_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserSummary, AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::NotFound)?;

        if !password::verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Wrong password");
            return Err(AuthError::InvalidPassword);
        }
        if !user.is_activated {
            return Err(AuthError::NotActivated);
        }

        info!(user_id = %user.id, "Credentials accepted");
        Ok(UserSummary::from(&user))
    }

    /// Creates an inactive account and mails its activation link.
    ///
    /// If the mail cannot be sent the account still exists; the error is
    /// returned so the caller can tell the user.
    #[instrument(skip(self))]
    pub async fn register(&self, new_user: NewUser) -> Result<RegistrationConfirmation, AuthError> {
        if new_user.password.is_empty() {
            return Err(AuthError::Validation(
                "password must not be empty".to_string(),
            ));
        }

        let (id, token) = {
            let _guard = self.registration.lock().await;

            if self.users.find_by_username(&new_user.username).await?.is_some() {
                return Err(AuthError::DuplicateUsername(new_user.username));
            }
            if self.users.find_by_email(&new_user.email).await?.is_some() {
                return Err(AuthError::DuplicateEmail(new_user.email));
            }

            let password_hash = password::hash_password(&new_user.password)?;
            let activation_token = password::activation_token();
            let id = self
                .users
                .create_user(UserCreate {
                    username: new_user.username.clone(),
                    email: new_user.email.clone(),
                    password_hash,
                    activation_token: activation_token.clone(),
                })
                .await?;
            (id, activation_token)
        };
        info!(user_id = %id, "User registered");

        let url = format!("{}/activate/{}", self.api_url, token);
        self.mailer.send(&new_user.email, &url).await?;

        Ok(RegistrationConfirmation {
            message: format!("An activation link has been sent to {}", new_user.email),
            user: UserSummary {
                id,
                username: new_user.username,
                email: new_user.email,
                is_activated: false,
            },
        })
    }

    /// Activates the account holding `token`. Each token works once.
    #[instrument(skip_all)]
    pub async fn activate(&self, token: &str) -> Result<ActivationConfirmation, AuthError> {
        let user = self
            .users
            .find_by_activation_token(token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        // A concurrent activation may have consumed the token since the lookup;
        // the actor re-checks it.
        let user = self.users.activate(user.id, token.to_string()).await?;
        info!(user_id = %user.id, "Account activated");

        Ok(ActivationConfirmation {
            user: UserSummary::from(&user),
            redirect_to: format!("{}/auth/login", self.api_url),
        })
    }

    /// Removes the account. Dependent data is the caller's concern; see
    /// [`ShopSystem::delete_user`](crate::lifecycle::ShopSystem::delete_user).
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &UserId) -> Result<(), AuthError> {
        self.users.delete(user_id.clone()).await?;
        info!("User deleted");
        Ok(())
    }
}
