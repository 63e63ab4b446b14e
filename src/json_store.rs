use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::user::UserFile;
use crate::store::UserStore;

/// File-backed store: one pretty-printed JSON document holding every
/// registered user under the top-level `users` key.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn load(&self) -> Result<UserFile, AppError> {
        tracing::debug!(path = %self.path.display(), "store: reading user file");

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store: file absent, empty store");
                return Ok(UserFile::default());
            }
            Err(e) => return Err(AppError::Storage(e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                // Corrupt contents must never block registration.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "store: unparsable user file, treating as empty"
                );
                Ok(UserFile::default())
            }
        }
    }

    async fn save(&self, data: &UserFile) -> Result<(), AppError> {
        tracing::debug!(
            path = %self.path.display(),
            user_count = data.users.len(),
            "store: writing user file"
        );

        let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.load().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRecord;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("database.json"));
        let data = store.load().await.unwrap();
        assert!(data.users.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        tokio::fs::write(&path, "{not json at all").await.unwrap();

        let store = JsonFileStore::new(&path);
        let data = store.load().await.unwrap();
        assert!(data.users.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        // valid JSON, but not the expected document shape
        tokio::fs::write(&path, r#"{"users": "nope"}"#).await.unwrap();

        let store = JsonFileStore::new(&path);
        let data = store.load().await.unwrap();
        assert!(data.users.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("database.json"));

        let data = UserFile {
            users: vec![UserRecord {
                username: "alice".into(),
                email: "a@x.com".into(),
                password: "0".repeat(64),
                created_at: "2026-01-01T00:00:00Z".into(),
            }],
        };
        store.save(&data).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.users.len(), 1);
        assert_eq!(loaded.users[0].username, "alice");
    }
}
