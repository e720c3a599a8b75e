//! Credential check and persisted login state

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::storage::SharedStore;
use crate::store::DEFAULT_LATENCY;
use crate::types::{Role, User};

const USER_KEY: &str = "auth_user";
const TOKENS_KEY: &str = "auth_tokens";

/// Turn a credential pair into a user.
///
/// Placeholder policy: the role comes from the email prefix (`owner*`,
/// `manager*`, anything else is staff) and the password is not inspected.
/// Only a malformed email is rejected.
pub fn authenticate(email: &str, _password: &str) -> Result<User> {
    let email = email.trim();
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(Error::invalid_credentials)?;
    if local.is_empty() || domain.is_empty() {
        return Err(Error::invalid_credentials());
    }

    // Prefixes are matched as written: `Owner@...` is staff
    let role = if email.starts_with("owner") {
        Role::Owner
    } else if email.starts_with("manager") {
        Role::Manager
    } else {
        Role::Staff
    };

    Ok(User {
        id: Uuid::new_v4().to_string(),
        name: local.to_string(),
        email: email.to_string(),
        role,
        avatar: None,
    })
}

/// Opaque bearer tokens; never validated or refreshed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthTokens {
    fn mint() -> Self {
        Self {
            access_token: Uuid::new_v4().to_string(),
            refresh_token: Uuid::new_v4().to_string(),
        }
    }
}

/// A logged-in user with their tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: User,
    pub tokens: AuthTokens,
}

/// Login state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Unauthenticated => None,
        }
    }

    /// The session, or `NotAuthenticated`
    pub fn require(self) -> Result<Session> {
        match self {
            SessionState::Authenticated(session) => Ok(session),
            SessionState::Unauthenticated => Err(Error::NotAuthenticated),
        }
    }
}

/// Persists the session in the same key-value store as the collections
#[derive(Clone)]
pub struct SessionManager {
    storage: SharedStore,
    latency: Duration,
}

impl SessionManager {
    pub fn new(storage: SharedStore) -> Self {
        Self {
            storage,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated login latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Authenticate and persist the resulting session
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let user = authenticate(email, password)?;
        let tokens = AuthTokens::mint();

        self.storage
            .set(USER_KEY, serde_json::to_vec(&user)?)
            .await?;
        self.storage
            .set(TOKENS_KEY, serde_json::to_vec(&tokens)?)
            .await?;

        info!(user = %user.name, role = %user.role, "Logged in");
        Ok(Session { user, tokens })
    }

    /// Load the saved session, if both halves of it are present
    pub async fn restore(&self) -> Result<SessionState> {
        let user = self.storage.get(USER_KEY).await?;
        let tokens = self.storage.get(TOKENS_KEY).await?;

        let (user, tokens) = match (user, tokens) {
            (Some(user), Some(tokens)) => (user, tokens),
            _ => {
                debug!("No saved session");
                return Ok(SessionState::Unauthenticated);
            }
        };

        let user: User = decode(USER_KEY, &user)?;
        let tokens: AuthTokens = decode(TOKENS_KEY, &tokens)?;
        debug!(user = %user.name, "Session restored");

        Ok(SessionState::Authenticated(Session { user, tokens }))
    }

    /// Forget the saved session
    pub async fn logout(&self) -> Result<()> {
        self.storage.remove(USER_KEY).await?;
        self.storage.remove(TOKENS_KEY).await?;
        info!("Logged out");
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| Error::StorageCorrupt {
        key: key.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn manager() -> (Arc<MemoryStore>, SessionManager) {
        let memory = Arc::new(MemoryStore::new());
        let manager = SessionManager::new(memory.clone()).with_latency(Duration::ZERO);
        (memory, manager)
    }

    #[test]
    fn test_role_from_email_prefix() {
        assert_eq!(authenticate("owner@gym.com", "x").unwrap().role, Role::Owner);
        assert_eq!(authenticate("manager@x.com", "").unwrap().role, Role::Manager);
        assert_eq!(authenticate("random@x.com", "pw").unwrap().role, Role::Staff);
        assert_eq!(authenticate("owner.jane@x.com", "pw").unwrap().role, Role::Owner);
    }

    #[test]
    fn test_role_prefix_is_case_sensitive() {
        assert_eq!(authenticate("Owner@gym.com", "x").unwrap().role, Role::Staff);
        assert_eq!(authenticate("MANAGER@gym.com", "x").unwrap().role, Role::Staff);
    }

    #[test]
    fn test_name_is_local_part() {
        let user = authenticate("manager.bob@gym.com", "pw").unwrap();
        assert_eq!(user.name, "manager.bob");
        assert_eq!(user.email, "manager.bob@gym.com");
    }

    #[test]
    fn test_malformed_email_rejected() {
        for email in ["", "owner", "@gym.com", "owner@"] {
            let err = authenticate(email, "pw").unwrap_err();
            assert_eq!(err.to_string(), "Authentication failed: invalid credentials");
        }
    }

    #[tokio::test]
    async fn test_login_restore_logout() {
        let (memory, manager) = manager();
        assert_eq!(manager.restore().await.unwrap(), SessionState::Unauthenticated);

        let session = manager.login("owner@gym.com", "secret").await.unwrap();
        assert!(memory.raw("auth_user").is_some());
        assert_ne!(session.tokens.access_token, session.tokens.refresh_token);

        let restored = manager.restore().await.unwrap();
        assert_eq!(restored.session(), Some(&session));

        manager.logout().await.unwrap();
        assert_eq!(manager.restore().await.unwrap(), SessionState::Unauthenticated);
        assert!(memory.raw("auth_tokens").is_none());
    }

    #[tokio::test]
    async fn test_tokens_wire_format() {
        let (memory, manager) = manager();
        manager.login("staff@gym.com", "pw").await.unwrap();

        let raw = memory.raw("auth_tokens").unwrap();
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert!(json["accessToken"].is_string());
        assert!(json["refreshToken"].is_string());
    }

    #[tokio::test]
    async fn test_half_session_is_unauthenticated() {
        let user = serde_json::to_vec(&authenticate("owner@gym.com", "").unwrap()).unwrap();
        let memory = Arc::new(MemoryStore::new().with_entry("auth_user", user));
        let manager = SessionManager::new(memory).with_latency(Duration::ZERO);

        let state = manager.restore().await.unwrap();
        assert!(matches!(
            state.require(),
            Err(Error::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_corrupt_session() {
        let memory = Arc::new(
            MemoryStore::new()
                .with_entry("auth_user", "garbage")
                .with_entry("auth_tokens", "{}"),
        );
        let manager = SessionManager::new(memory).with_latency(Duration::ZERO);

        let err = manager.restore().await.unwrap_err();
        assert!(matches!(err, Error::StorageCorrupt { ref key, .. } if key == "auth_user"));
    }

    #[tokio::test]
    async fn test_failed_login_persists_nothing() {
        let (memory, manager) = manager();
        assert!(manager.login("nobody", "pw").await.is_err());
        assert_eq!(memory.call_count("set"), 0);
    }
}
