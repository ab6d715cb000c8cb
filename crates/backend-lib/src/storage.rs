// ============================
// crates/backend-lib/src/storage.rs
// ============================
//! User storage abstraction with flat-file implementation.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use memberarea_common::{Role, UserProfile};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tokio::fs as tokio_fs;
use uuid::Uuid;

use crate::error::AppError;

/// Stored user record. Carries the password, so it never leaves the server;
/// `into_profile` strips it for anything client-facing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Plaintext. Demo-only; a real deployment must store a salted hash.
    pub password: String,
    pub counter_value: i32,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            role: Role::User,
            password,
            counter_value: 0,
            created_at: Utc::now(),
        }
    }

    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            counter_value: self.counter_value,
        }
    }
}

/// Partial update applied by `UserStore::update_user`.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub password: Option<String>,
    pub counter_value: Option<i32>,
}

impl UserPatch {
    pub fn password(value: impl Into<String>) -> Self {
        Self {
            password: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn counter_value(value: i32) -> Self {
        Self {
            counter_value: Some(value),
            ..Self::default()
        }
    }
}

/// Trait for user storage backends
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user; fails with `Conflict` if the email is taken.
    async fn create_user(&self, user: UserRecord) -> Result<UserRecord, AppError>;

    /// Look up a user by id.
    async fn find_user_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError>;

    /// Look up a user by email address.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    /// Apply a patch to a user; fails with `NotFound` if absent.
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<UserRecord, AppError>;
}

/// Flat-file implementation of the `UserStore` trait.
/// One JSON document per user under `<root>/users/<id>.json`.
#[derive(Clone)]
pub struct FlatFileUserStore {
    root: PathBuf,
}

impl FlatFileUserStore {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("users"))?;
        Ok(Self { root })
    }

    fn user_path(&self, id: &str) -> PathBuf {
        self.root.join("users").join(format!("{id}.json"))
    }

    async fn read_user(&self, path: &Path) -> Result<UserRecord, AppError> {
        let content = tokio_fs::read_to_string(path).await?;
        let user: UserRecord = serde_json::from_str(&content)?;
        Ok(user)
    }

    async fn write_user(&self, user: &UserRecord) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(user)?;
        tokio_fs::write(self.user_path(&user.id), json).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for FlatFileUserStore {
    async fn create_user(&self, user: UserRecord) -> Result<UserRecord, AppError> {
        if self.find_user_by_email(&user.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "email already registered: {}",
                user.email
            )));
        }

        self.write_user(&user).await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError> {
        let path = self.user_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_user(&path).await?))
    }

    /// Scan the users directory. Linear, which is fine at demo scale.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let mut entries = tokio_fs::read_dir(self.root.join("users")).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.path().extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            let user = self.read_user(&entry.path()).await?;
            if user.email == email {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<UserRecord, AppError> {
        let path = self.user_path(id);
        if !path.exists() {
            return Err(AppError::NotFound(format!("user not found: {id}")));
        }

        let mut user = self.read_user(&path).await?;
        if let Some(password) = patch.password {
            user.password = password;
        }
        if let Some(counter_value) = patch.counter_value {
            user.counter_value = counter_value;
        }
        self.write_user(&user).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store() -> (FlatFileUserStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = FlatFileUserStore::new(dir.path()).unwrap();
        (store, dir)
    }

    fn user(name: &str, email: &str) -> UserRecord {
        UserRecord::new(
            name.to_string(),
            email.to_string(),
            "Password123!".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let (store, _dir) = store();
        let created = store.create_user(user("Alice", "alice@example.com")).await.unwrap();

        let found = store.find_user_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.email, "alice@example.com");
        assert_eq!(found.counter_value, 0);
        assert_eq!(found.role, Role::User);
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let (store, _dir) = store();
        store.create_user(user("Alice", "alice@example.com")).await.unwrap();
        store.create_user(user("Bob", "bob@example.com")).await.unwrap();

        let found = store
            .find_user_by_email("bob@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Bob");
        assert!(store
            .find_user_by_email("carol@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let (store, _dir) = store();
        store.create_user(user("Alice", "alice@example.com")).await.unwrap();

        let err = store
            .create_user(user("Alice2", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_password_and_counter() {
        let (store, _dir) = store();
        let created = store.create_user(user("Alice", "alice@example.com")).await.unwrap();

        let updated = store
            .update_user(&created.id, UserPatch::password("NewPass456!"))
            .await
            .unwrap();
        assert_eq!(updated.password, "NewPass456!");
        assert_eq!(updated.counter_value, 0);

        let updated = store
            .update_user(&created.id, UserPatch::counter_value(5))
            .await
            .unwrap();
        assert_eq!(updated.counter_value, 5);
        // unrelated fields survive the patch
        assert_eq!(updated.password, "NewPass456!");
        assert_eq!(updated.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let (store, _dir) = store();
        let err = store
            .update_user("no-such-id", UserPatch::counter_value(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_into_profile_strips_password() {
        let record = user("Alice", "alice@example.com");
        let id = record.id.clone();
        let profile = record.into_profile();
        assert_eq!(profile.id, id);
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
    }
}
