use async_trait::async_trait;
use shop::auth::{ActivationMailer, AuthError, AuthService, LogMailer, MailError, NewUser};
use shop::user_actor;

const API_URL: &str = "http://shop.test";

fn start() -> AuthService<LogMailer> {
    let (actor, users) = user_actor::new(32);
    tokio::spawn(actor.run(()));
    AuthService::new(users, LogMailer::new("noreply@shop.test"), API_URL)
}

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password: "s3cret".to_string(),
    }
}

fn last_token(auth: &AuthService<LogMailer>) -> String {
    let url = auth.mailer().sent().pop().unwrap().activation_url;
    url.strip_prefix(&format!("{API_URL}/activate/"))
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_register_activate_login_flow() {
    let auth = start();

    let confirmation = auth
        .register(new_user("ada", "ada@example.com"))
        .await
        .unwrap();
    assert!(!confirmation.user.is_activated);

    let sent = auth.mailer().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ada@example.com");
    assert_eq!(sent[0].from, "noreply@shop.test");

    let error = auth.validate_credentials("ada", "s3cret").await.unwrap_err();
    assert_eq!(error, AuthError::NotActivated);
    assert_eq!(error.status_code(), 401);

    let token = last_token(&auth);
    assert_eq!(token.len(), 64);
    let activated = auth.activate(&token).await.unwrap();
    assert_eq!(activated.redirect_to, "http://shop.test/auth/login");
    assert!(activated.user.is_activated);

    let user = auth.validate_credentials("ada", "s3cret").await.unwrap();
    assert_eq!(user.id, confirmation.user.id);
    assert!(user.is_activated);

    assert_eq!(auth.activate(&token).await, Err(AuthError::InvalidToken));
}

#[tokio::test]
async fn test_credential_failures() {
    let auth = start();
    auth.register(new_user("ada", "ada@example.com"))
        .await
        .unwrap();

    assert_eq!(
        auth.validate_credentials("nobody", "s3cret").await,
        Err(AuthError::NotFound)
    );
    assert_eq!(
        auth.validate_credentials("ada", "wrong").await,
        Err(AuthError::InvalidPassword)
    );
    assert_eq!(auth.activate("deadbeef").await, Err(AuthError::InvalidToken));
}

#[tokio::test]
async fn test_duplicates_are_rejected() {
    let auth = start();
    auth.register(new_user("ada", "ada@example.com"))
        .await
        .unwrap();

    assert_eq!(
        auth.register(new_user("ada", "other@example.com")).await,
        Err(AuthError::DuplicateUsername("ada".to_string()))
    );
    let error = auth
        .register(new_user("grace", "ada@example.com"))
        .await
        .unwrap_err();
    assert_eq!(error, AuthError::DuplicateEmail("ada@example.com".to_string()));
    assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn test_concurrent_registrations_of_one_name() {
    let auth = std::sync::Arc::new(start());

    let mut handles = Vec::new();
    for n in 0..5 {
        let auth = auth.clone();
        handles.push(tokio::spawn(async move {
            auth.register(new_user("ada", &format!("ada{n}@example.com")))
                .await
        }));
    }

    let mut registered = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => registered += 1,
            Err(e) => assert_eq!(e, AuthError::DuplicateUsername("ada".to_string())),
        }
    }
    assert_eq!(registered, 1);
}

#[tokio::test]
async fn test_invalid_input_is_a_validation_error() {
    let auth = start();

    let mut empty_password = new_user("ada", "ada@example.com");
    empty_password.password.clear();
    assert!(matches!(
        auth.register(empty_password).await,
        Err(AuthError::Validation(_))
    ));
    assert!(matches!(
        auth.register(new_user("ada", "not-an-email")).await,
        Err(AuthError::Validation(_))
    ));
}

struct BrokenMailer;

#[async_trait]
impl ActivationMailer for BrokenMailer {
    async fn send(&self, _to: &str, _activation_url: &str) -> Result<(), MailError> {
        Err(MailError("smtp unreachable".to_string()))
    }
}

#[tokio::test]
async fn test_mail_failure_is_reported_and_account_kept() {
    let (actor, users) = user_actor::new(32);
    tokio::spawn(actor.run(()));
    let auth = AuthService::new(users.clone(), BrokenMailer, API_URL);

    let error = auth
        .register(new_user("ada", "ada@example.com"))
        .await
        .unwrap_err();
    assert_eq!(error, AuthError::Mail(MailError("smtp unreachable".to_string())));
    assert_eq!(error.status_code(), 500);

    let stored = users.find_by_username("ada").await.unwrap().unwrap();
    assert!(!stored.is_activated);
    assert!(stored.password_hash.starts_with("$argon2"));
}
