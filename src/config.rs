use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub redis_url: String,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret_key: String,
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_minutes: i64,
    /// When true, the refresh-token rotation is a compare-and-swap and a
    /// lost race surfaces as invalid credentials instead of last-write-wins.
    pub strict_refresh: bool,
    pub store_timeout_ms: u64,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub from: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");
        let redis_url: String = Self::get_env("REDIS_URI");

        EnvConfig {
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url,
            redis_url,
            auth: AuthConfig {
                secret_key: Self::get_env("SECRET_KEY"),
                algorithm: Self::get_env_or("ALGORITHM", "HS256"),
                access_token_expire_minutes: Self::get_env_or("ACCESS_TOKEN_EXPIRE_MINUTES", "30")
                    .parse()
                    .unwrap_or(30),
                refresh_token_expire_minutes: Self::get_env_or(
                    "REFRESH_TOKEN_EXPIRE_MINUTES",
                    "1440",
                )
                .parse()
                .unwrap_or(1440),
                strict_refresh: Self::get_env_or("STRICT_REFRESH", "true")
                    .parse()
                    .unwrap_or(true),
                store_timeout_ms: Self::get_env_or("STORE_TIMEOUT_MS", "3000")
                    .parse()
                    .unwrap_or(3000),
            },
            mail: MailConfig {
                api_key: Self::get_env("RESEND_KEY"),
                endpoint: Self::get_env_or("MAIL_ENDPOINT", "https://api.resend.com/emails"),
                from: Self::get_env_or("MAIL_FROM", "noreply@orgnest.dev"),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

#[allow(dead_code)]
pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
