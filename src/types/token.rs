use serde::{Deserialize, Serialize};

/// Access + refresh pair returned by /token and /refresh-token.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenPairRes {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String, // always "bearer"
}

impl TokenPairRes {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}

// Password-grant form. The field is called `username` but carries the email.
#[derive(Serialize, Deserialize, Debug)]
pub struct RLoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RRefreshToken {
    pub refresh_token: String,
}
