use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tokio::time::timeout;
use tracing::error;

use crate::types::error::AppError;

/// Expiring key-value store of revoked refresh tokens. Entries carry a TTL
/// matching the token's remaining lifetime, so the store self-cleans.
///
/// Fails closed: an unreachable store aborts the caller's operation with
/// ServiceUnavailable instead of answering "not revoked".
#[derive(Clone)]
pub struct RevocationStore {
    connection: ConnectionManager,
    timeout: Duration,
}

impl RevocationStore {
    pub async fn connect(url: &str, timeout_ms: u64) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self {
            connection,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    fn key(token: &str) -> String {
        format!("revoked_token:{token}")
    }

    /// Idempotent; re-marking overwrites the TTL.
    pub async fn mark_revoked(&self, token: &str, ttl_secs: u64) -> Result<(), AppError> {
        let mut connection = self.connection.clone();
        let write = connection.set_ex::<_, _, ()>(Self::key(token), 1, ttl_secs);
        match timeout(self.timeout, write).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!("revocation store write failed: {e}");
                Err(AppError::ServiceUnavailable)
            }
            Err(_) => {
                error!("revocation store write timed out");
                Err(AppError::ServiceUnavailable)
            }
        }
    }

    pub async fn is_revoked(&self, token: &str) -> Result<bool, AppError> {
        let mut connection = self.connection.clone();
        let read = connection.exists::<_, bool>(Self::key(token));
        match timeout(self.timeout, read).await {
            Ok(Ok(revoked)) => Ok(revoked),
            Ok(Err(e)) => {
                error!("revocation store read failed: {e}");
                Err(AppError::ServiceUnavailable)
            }
            Err(_) => {
                error!("revocation store read timed out");
                Err(AppError::ServiceUnavailable)
            }
        }
    }
}
