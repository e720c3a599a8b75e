//! Session and visibility tests

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use ironcore_admin::error::Error;
use ironcore_admin::session::{
    authenticate, can_view, visible_resources, Resource, SessionManager, SessionState,
};
use ironcore_admin::storage::{FileStore, MemoryStore};
use ironcore_admin::types::Role;

#[test]
fn test_role_selection_by_email() {
    assert_eq!(authenticate("owner@gym.com", "anything").unwrap().role, Role::Owner);
    assert_eq!(authenticate("manager@x.com", "anything").unwrap().role, Role::Manager);
    assert_eq!(authenticate("random@x.com", "anything").unwrap().role, Role::Staff);
}

#[test]
fn test_password_is_ignored() {
    let a = authenticate("manager@x.com", "one").unwrap();
    let b = authenticate("manager@x.com", "two").unwrap();
    assert_eq!(a.role, b.role);
    assert_eq!(a.name, b.name);
}

#[test]
fn test_rejection_is_generic() {
    let err = authenticate("not-an-email", "pw").unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { .. }));
    assert_eq!(err.code().as_str(), "E300");
}

#[test]
fn test_staff_sees_dashboard_and_members() {
    let expected: BTreeSet<_> = [Resource::Dashboard, Resource::Members].into_iter().collect();
    assert_eq!(visible_resources(Role::Staff), expected);
}

#[test]
fn test_only_owner_sees_payments() {
    assert!(can_view(Role::Owner, Resource::Payments));
    assert!(!can_view(Role::Manager, Resource::Payments));
    assert!(!can_view(Role::Staff, Resource::Payments));
    assert!(can_view(Role::Manager, Resource::Trainers));
}

#[tokio::test]
async fn test_session_survives_restart_on_file_store() {
    let dir = TempDir::new().unwrap();

    let first = SessionManager::new(Arc::new(FileStore::new(dir.path())))
        .with_latency(Duration::ZERO);
    let session = first.login("manager@gym.com", "pw").await.unwrap();

    let second = SessionManager::new(Arc::new(FileStore::new(dir.path())))
        .with_latency(Duration::ZERO);
    let restored = second.restore().await.unwrap().require().unwrap();
    assert_eq!(restored, session);
    assert_eq!(restored.user.role, Role::Manager);

    second.logout().await.unwrap();
    assert_eq!(first.restore().await.unwrap(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_without_session() {
    let manager = SessionManager::new(Arc::new(MemoryStore::new())).with_latency(Duration::ZERO);
    manager.logout().await.unwrap();
    assert!(matches!(
        manager.restore().await.unwrap().require(),
        Err(Error::NotAuthenticated)
    ));
}
