use async_trait::async_trait;

use crate::error::AppError;
use crate::models::user::UserFile;

/// Durable storage for the user file. Every operation reads or writes
/// the whole document; nothing is cached between requests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Read the full store. A missing or unparsable backing file is
    /// normalized to an empty store; only real I/O failures (permission
    /// denied, disk errors) surface as `AppError::Storage`.
    async fn load(&self) -> Result<UserFile, AppError>;

    /// Serialize the full store and overwrite the backing file.
    /// Write failures propagate unchanged; there is no retry.
    async fn save(&self, data: &UserFile) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
