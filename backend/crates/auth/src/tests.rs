//! Auth use case tests against an in-memory repository.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use kernel::id::SessionId;
use platform::token;
use uuid::Uuid;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::sign_in::{SignInInput, SignInOutput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::domain::entity::session::Session;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
struct MemAuthRepo {
    users: Arc<Mutex<Vec<User>>>,
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl MemAuthRepo {
    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl UserRepository for MemAuthRepo {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username.canonical() == user.username.canonical())
        {
            return Err(AuthError::UsernameTaken);
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_identifier(&self, identifier: &str) -> AuthResult<Option<User>> {
        let identifier = identifier.to_lowercase();
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username.canonical() == identifier || u.email.as_str() == identifier)
            .cloned())
    }
}

impl SessionRepository for MemAuthRepo {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(*session.session_id.as_uuid(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<Session>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .get(session_id.as_uuid())
            .cloned())
    }

    async fn touch(&self, session: &Session) -> AuthResult<()> {
        if let Some(stored) = self
            .sessions
            .lock()
            .unwrap()
            .get_mut(session.session_id.as_uuid())
        {
            stored.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> AuthResult<u64> {
        let removed = self
            .sessions
            .lock()
            .unwrap()
            .remove(session_id.as_uuid())
            .is_some();
        Ok(u64::from(removed))
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

async fn register_user(repo: &Arc<MemAuthRepo>, username: &str, email: &str, password: &str) {
    RegisterUseCase::new(Arc::clone(repo))
        .execute(RegisterInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap();
}

async fn sign_in(
    repo: &Arc<MemAuthRepo>,
    config: &Arc<AuthConfig>,
    identifier: &str,
    password: &str,
) -> AuthResult<SignInOutput> {
    SignInUseCase::new(Arc::clone(repo), Arc::clone(repo), Arc::clone(config))
        .execute(SignInInput {
            identifier: identifier.to_string(),
            password: password.to_string(),
        })
        .await
}

#[tokio::test]
async fn register_then_sign_in_by_username_and_email() {
    let repo = Arc::new(MemAuthRepo::default());
    let config = test_config();
    register_user(&repo, "Alice", "alice@example.com", "correct horse").await;

    // Case-insensitive username, then email
    let by_username = sign_in(&repo, &config, "alice", "correct horse")
        .await
        .unwrap();
    let by_email = sign_in(&repo, &config, "ALICE@example.com", "correct horse")
        .await
        .unwrap();
    assert_eq!(by_username.user_id, by_email.user_id);

    // Both tokens resolve to live sessions for the same user
    let check = CheckSessionUseCase::new(Arc::clone(&repo), Arc::clone(&config));
    let session = check.get_session(&by_username.session_token).await.unwrap();
    assert_eq!(session.user_id, by_username.user_id);
    assert_eq!(session.username, "Alice");
}

#[tokio::test]
async fn unknown_account_and_wrong_password_are_indistinguishable() {
    let repo = Arc::new(MemAuthRepo::default());
    let config = test_config();
    register_user(&repo, "alice", "alice@example.com", "correct horse").await;

    let wrong_password = sign_in(&repo, &config, "alice", "battery staple")
        .await
        .unwrap_err();
    let unknown_account = sign_in(&repo, &config, "nobody", "battery staple")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_account, AuthError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_account.to_string());
    assert_eq!(
        wrong_password.status_code(),
        unknown_account.status_code()
    );
}

#[tokio::test]
async fn duplicate_username_and_email_are_rejected() {
    let repo = Arc::new(MemAuthRepo::default());
    register_user(&repo, "alice", "alice@example.com", "correct horse").await;

    // Same username, different case
    let err = RegisterUseCase::new(Arc::clone(&repo))
        .execute(RegisterInput {
            username: "ALICE".to_string(),
            email: "other@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UsernameTaken));

    let err = RegisterUseCase::new(Arc::clone(&repo))
        .execute(RegisterInput {
            username: "bob".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let repo = Arc::new(MemAuthRepo::default());
    let use_case = RegisterUseCase::new(Arc::clone(&repo));

    let cases = [
        ("a", "alice@example.com", "correct horse"),
        ("has space", "alice@example.com", "correct horse"),
        ("alice", "not-an-email", "correct horse"),
        ("alice", "alice@example.com", "   "),
    ];
    for (username, email, password) in cases {
        let err = use_case
            .execute(RegisterInput {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err, AuthError::Validation(_)),
            "expected validation error for ({username}, {email})"
        );
    }
    assert!(repo.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sign_out_is_idempotent() {
    let repo = Arc::new(MemAuthRepo::default());
    let config = test_config();
    register_user(&repo, "alice", "alice@example.com", "correct horse").await;
    let output = sign_in(&repo, &config, "alice", "correct horse").await.unwrap();

    let sign_out = SignOutUseCase::new(Arc::clone(&repo), Arc::clone(&config));

    // Garbage tokens are a no-op, not an error
    sign_out.execute("not-even-a-token").await.unwrap();
    assert_eq!(repo.session_count(), 1);

    sign_out.execute(&output.session_token).await.unwrap();
    assert_eq!(repo.session_count(), 0);

    // Second sign-out with the same token
    sign_out.execute(&output.session_token).await.unwrap();
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let repo = Arc::new(MemAuthRepo::default());
    let config = test_config();
    register_user(&repo, "alice", "alice@example.com", "correct horse").await;
    let output = sign_in(&repo, &config, "alice", "correct horse").await.unwrap();

    SignOutUseCase::new(Arc::clone(&repo), Arc::clone(&config))
        .execute(&output.session_token)
        .await
        .unwrap();

    let err = CheckSessionUseCase::new(Arc::clone(&repo), Arc::clone(&config))
        .get_session(&output.session_token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::SessionInvalid));
}

#[tokio::test]
async fn tampered_and_dangling_tokens_are_rejected() {
    let repo = Arc::new(MemAuthRepo::default());
    let config = test_config();
    register_user(&repo, "alice", "alice@example.com", "correct horse").await;
    let output = sign_in(&repo, &config, "alice", "correct horse").await.unwrap();

    let check = CheckSessionUseCase::new(Arc::clone(&repo), Arc::clone(&config));

    // Swap the session id, keep the signature
    let signature = output.session_token.split_once('.').unwrap().1;
    let tampered = format!("{}.{signature}", Uuid::new_v4());
    let err = check.get_session(&tampered).await.unwrap_err();
    assert!(matches!(err, AuthError::SessionInvalid));

    // Validly signed token whose session row does not exist
    let dangling = token::sign_session_id(&config.session_secret, Uuid::new_v4());
    let err = check.get_session(&dangling).await.unwrap_err();
    assert!(matches!(err, AuthError::SessionInvalid));
}

#[tokio::test]
async fn expired_session_is_rejected_and_deleted() {
    let repo = Arc::new(MemAuthRepo::default());
    let config = test_config();

    let session = Session::new(
        kernel::id::UserId::new(),
        "alice".to_string(),
        chrono::Duration::seconds(-60),
    );
    SessionRepository::create(repo.as_ref(), &session)
        .await
        .unwrap();
    let stale_token =
        token::sign_session_id(&config.session_secret, session.session_id.into_uuid());

    let err = CheckSessionUseCase::new(Arc::clone(&repo), Arc::clone(&config))
        .get_session(&stale_token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::SessionInvalid));
    assert_eq!(repo.session_count(), 0);
}

#[tokio::test]
async fn cleanup_expired_only_removes_stale_sessions() {
    let repo = Arc::new(MemAuthRepo::default());

    let live = Session::new(
        kernel::id::UserId::new(),
        "alice".to_string(),
        chrono::Duration::hours(1),
    );
    let stale = Session::new(
        kernel::id::UserId::new(),
        "bob".to_string(),
        chrono::Duration::seconds(-1),
    );
    SessionRepository::create(repo.as_ref(), &live).await.unwrap();
    SessionRepository::create(repo.as_ref(), &stale).await.unwrap();

    let removed = repo.cleanup_expired().await.unwrap();
    assert_eq!(removed, 1);
    assert!(
        SessionRepository::find_by_id(repo.as_ref(), live.session_id)
            .await
            .unwrap()
            .is_some()
    );
}
