use std::sync::Arc;

use chrono::Duration;
use tracing::warn;

use crate::config::AuthConfig;
use crate::db::postgres_service::PostgresService;
use crate::db::revocation_store::RevocationStore;
use crate::types::error::AppError;
use crate::types::token::TokenPairRes;
use crate::types::user::DBUserCreate;
use crate::utils::password;
use crate::utils::token::{TokenCodec, TokenError};

/// Why a presented token was turned away.
///
/// A token moves from issued to exactly one of: active (still the stored
/// value, unexpired, unrevoked), superseded (a later login/refresh replaced
/// it), revoked, or expired. Superseded and revoked are collapsed into one
/// HTTP status for the client but stay distinct here for auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Malformed,
    BadSignature,
    Expired,
    UnknownSubject,
    Superseded,
    Revoked,
}

impl From<TokenError> for RejectReason {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Malformed => RejectReason::Malformed,
            TokenError::InvalidSignature => RejectReason::BadSignature,
            TokenError::Expired => RejectReason::Expired,
        }
    }
}

/// Orchestrates login, refresh and revoke over the user store, the token
/// codec and the revocation store. Holds the single-active-refresh-token
/// invariant: at most one stored value per user, replaced in place.
pub struct SessionManager {
    db: Arc<PostgresService>,
    revocations: RevocationStore,
    codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
    strict_refresh: bool,
}

impl SessionManager {
    pub fn new(
        db: Arc<PostgresService>,
        revocations: RevocationStore,
        auth: &AuthConfig,
    ) -> Result<Self, AppError> {
        Ok(Self {
            db,
            revocations,
            codec: TokenCodec::new(&auth.secret_key, &auth.algorithm)?,
            access_ttl: Duration::minutes(auth.access_token_expire_minutes),
            refresh_ttl: Duration::minutes(auth.refresh_token_expire_minutes),
            strict_refresh: auth.strict_refresh,
        })
    }

    fn issue_pair(&self, subject: &str) -> Result<(String, String), AppError> {
        let access = self.codec.issue(subject, self.access_ttl)?;
        let refresh = self.codec.issue(subject, self.refresh_ttl)?;
        Ok((access, refresh))
    }

    fn reject(&self, reason: RejectReason) -> AppError {
        warn!("token rejected: {:?}", reason);
        match reason {
            RejectReason::Revoked => AppError::TokenRevoked,
            _ => AppError::InvalidCredentials,
        }
    }

    pub async fn signup(
        &self,
        name: String,
        email: String,
        plain_password: &str,
    ) -> Result<(), AppError> {
        let password_hash = password::hash(plain_password)?;
        self.db
            .create_user(DBUserCreate {
                name,
                email,
                password_hash,
            })
            .await?;
        Ok(())
    }

    /// Unknown email and wrong password fail identically, with no side effect.
    pub async fn login(&self, email: &str, plain_password: &str) -> Result<TokenPairRes, AppError> {
        let user = match self.db.find_user_by_email(email).await? {
            Some(user) => user,
            None => return Err(AppError::InvalidCredentials),
        };
        if !password::verify(plain_password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }
        let (access, refresh) = self.issue_pair(&user.email)?;
        self.db
            .set_refresh_token(user.id, Some(refresh.clone()))
            .await?;
        Ok(TokenPairRes::bearer(access, refresh))
    }

    /// Both gates run on every refresh: the presented token must exactly
    /// equal the stored value AND be absent from the revocation store.
    pub async fn refresh(&self, old_refresh_token: &str) -> Result<TokenPairRes, AppError> {
        let claims = self
            .codec
            .verify(old_refresh_token)
            .map_err(|e| self.reject(e.into()))?;

        let user = match self.db.find_user_by_email(&claims.sub).await? {
            Some(user) => user,
            None => return Err(self.reject(RejectReason::UnknownSubject)),
        };

        // Covers tampered subjects and already-superseded tokens alike.
        if user.refresh_token.as_deref() != Some(old_refresh_token) {
            return Err(self.reject(RejectReason::Superseded));
        }

        if self.revocations.is_revoked(old_refresh_token).await? {
            return Err(self.reject(RejectReason::Revoked));
        }

        let (access, refresh) = self.issue_pair(&user.email)?;
        if self.strict_refresh {
            let swapped = self
                .db
                .replace_refresh_token(user.id, old_refresh_token, &refresh)
                .await?;
            if !swapped {
                // A concurrent rotation won between our equality check and
                // the write.
                return Err(self.reject(RejectReason::Superseded));
            }
        } else {
            self.db
                .set_refresh_token(user.id, Some(refresh.clone()))
                .await?;
        }
        Ok(TokenPairRes::bearer(access, refresh))
    }

    /// A user may only revoke their own token. The stored refresh_token is
    /// left in place; the revocation gate is what blocks reuse.
    pub async fn revoke(
        &self,
        refresh_token: &str,
        acting_user: &entity::user::Model,
    ) -> Result<(), AppError> {
        let claims = self
            .codec
            .verify(refresh_token)
            .map_err(|e| self.reject(e.into()))?;
        if claims.sub != acting_user.email {
            warn!("revoke rejected: token subject does not match acting user");
            return Err(AppError::InvalidCredentials);
        }
        let remaining = TokenCodec::remaining_secs(&claims).max(1);
        self.revocations
            .mark_revoked(refresh_token, remaining as u64)
            .await?;
        Ok(())
    }

    /// Guard entry point: bearer access token to user record. Every failure
    /// mode collapses to Unauthorized so callers can't probe which check
    /// failed.
    pub async fn authenticate(&self, bearer: &str) -> Result<entity::user::Model, AppError> {
        let claims = self
            .codec
            .verify(bearer)
            .map_err(|_| AppError::Unauthorized)?;
        self.db
            .find_user_by_email(&claims.sub)
            .await
            .ok()
            .flatten()
            .ok_or(AppError::Unauthorized)
    }
}
