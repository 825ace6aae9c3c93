//! Custom actions for the User actor.

/// Operations on a [`User`](crate::model::User) beyond CRUD.
#[derive(Clone)]
pub enum UserAction {
    /// Marks the account active if `token` is its pending activation token,
    /// and consumes the token.
    Activate { token: String },
}

impl std::fmt::Debug for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::Activate { .. } => f.write_str("Activate"),
        }
    }
}
