use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::AppError;
use crate::models::user::UserRecord;
use crate::password::hash_password;
use crate::store::UserStore;
use crate::util::now_iso8601;

/// Register/login over a [`UserStore`]. Each call loads the store
/// fresh, does its check or mutation, and (for register) writes the
/// whole store back.
#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn UserStore>,
    // Serializes the load-append-save cycle so concurrent registrations
    // cannot overwrite each other's write.
    write_lock: Arc<Mutex<()>>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Register a new user. Fails with `DuplicateUsername` if the
    /// username is already taken (exact, case-sensitive match); on
    /// success the record is appended and the full store saved.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut data = self.store.load().await?;

        if data.users.iter().any(|u| u.username == username) {
            return Err(AppError::DuplicateUsername);
        }

        data.users.push(UserRecord {
            username: username.to_string(),
            email: email.to_string(),
            password: hash_password(password),
            created_at: now_iso8601(),
        });

        self.store.save(&data).await?;

        Ok(username.to_string())
    }

    /// Verify credentials. Succeeds on the first record whose username
    /// and password digest both match exactly; otherwise fails with
    /// `InvalidCredentials`. Unknown username and wrong password are
    /// deliberately indistinguishable. Never mutates the store.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let data = self.store.load().await?;
        let digest = hash_password(password);

        let matched = data
            .users
            .iter()
            .any(|u| u.username == username && u.password == digest);

        if matched {
            Ok(username.to_string())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.health_check().await
    }
}
