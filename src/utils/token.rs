use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::error::AppError;

/// Signed claim bundle carried by both access and refresh tokens.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Malformed,
    InvalidSignature,
    Expired,
}

/// Encodes and decodes signed, time-bounded claims. The secret is injected,
/// never read from a global, so tests can run with their own keys.
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str, algorithm: &str) -> Result<Self, AppError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| AppError::Internal(format!("unsupported algorithm: {algorithm}")))?;
        let mut validation = Validation::new(algorithm);
        // Expiry is checked by hand below: exp must be strictly greater than
        // now, with zero leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        Ok(Self {
            algorithm,
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn issue(&self, subject: &str, lifetime: Duration) -> Result<String, AppError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + lifetime).timestamp(),
        };
        encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }

    /// Seconds until the claim expires, clamped at zero.
    pub fn remaining_secs(claims: &Claims) -> i64 {
        (claims.exp - Utc::now().timestamp()).max(0)
    }
}
