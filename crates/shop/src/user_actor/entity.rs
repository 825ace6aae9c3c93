//! [`ActorEntity`] implementation for [`User`].

use super::actions::UserAction;
use super::error::UserError;
use crate::model::{User, UserCreate, UserId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    // Accounts change only through actions.
    type Update = ();
    type Action = UserAction;
    type ActionResult = User;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        if params.username.trim().is_empty() {
            return Err(UserError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        if !params.email.contains('@') {
            return Err(UserError::ValidationError(format!(
                "invalid email address: {}",
                params.email
            )));
        }

        Ok(Self {
            id,
            username: params.username,
            email: params.email,
            password_hash: params.password_hash,
            activation_token: Some(params.activation_token),
            is_activated: false,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// # Actions
    /// - `Activate`: requires the pending token, then activates and clears it.
    ///   Returns the activated user.
    async fn handle_action(
        &mut self,
        action: UserAction,
        _ctx: &Self::Context,
    ) -> Result<User, Self::Error> {
        match action {
            UserAction::Activate { token } => {
                if self.activation_token.as_deref() != Some(token.as_str()) {
                    return Err(UserError::InvalidToken);
                }
                self.is_activated = true;
                self.activation_token = None;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(username: &str, email: &str) -> UserCreate {
        UserCreate {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            activation_token: "tok".to_string(),
        }
    }

    #[test]
    fn new_users_start_inactive_with_a_token() {
        let user = User::from_create_params(UserId(1), create("ada", "ada@example.com")).unwrap();

        assert!(!user.is_activated);
        assert_eq!(user.activation_token.as_deref(), Some("tok"));
    }

    #[test]
    fn rejects_blank_username_and_bad_email() {
        assert!(matches!(
            User::from_create_params(UserId(1), create("  ", "ada@example.com")),
            Err(UserError::ValidationError(_))
        ));
        assert!(matches!(
            User::from_create_params(UserId(1), create("ada", "not-an-email")),
            Err(UserError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn activation_token_is_single_use() {
        let mut user =
            User::from_create_params(UserId(1), create("ada", "ada@example.com")).unwrap();

        let wrong = UserAction::Activate {
            token: "nope".to_string(),
        };
        assert_eq!(
            user.handle_action(wrong, &()).await,
            Err(UserError::InvalidToken)
        );

        let right = UserAction::Activate {
            token: "tok".to_string(),
        };
        let activated = user.handle_action(right.clone(), &()).await.unwrap();
        assert!(activated.is_activated);
        assert_eq!(activated.activation_token, None);

        assert_eq!(
            user.handle_action(right, &()).await,
            Err(UserError::InvalidToken)
        );
    }
}
