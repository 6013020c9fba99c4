use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::redis::Redis;

use orgnest::config::{AuthConfig, MailConfig};
use orgnest::db::postgres_service::PostgresService;
use orgnest::db::revocation_store::RevocationStore;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub revocations: RevocationStore,
    pub _pg_container: ContainerAsync<Postgres>,
    pub _redis_container: ContainerAsync<Redis>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let pg_container = postgres.start().await.expect("Failed to start postgres container");

        let host = pg_container.get_host().await.expect("Failed to get host");
        let port = pg_container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let redis_container = Redis::default().start().await.expect("Failed to start redis container");
        let redis_host = redis_container.get_host().await.expect("Failed to get host");
        let redis_port = redis_container
            .get_host_port_ipv4(6379)
            .await
            .expect("Failed to get port");

        let redis_url = format!("redis://{}:{}", redis_host, redis_port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        let revocations = RevocationStore::connect(&redis_url, 3000)
            .await
            .expect("Failed to connect to the revocation store");

        TestContext {
            db,
            revocations,
            _pg_container: pg_container,
            _redis_container: redis_container,
        }
    }
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        secret_key: "integration-test-secret".to_string(),
        algorithm: "HS256".to_string(),
        access_token_expire_minutes: 30,
        refresh_token_expire_minutes: 60,
        strict_refresh: true,
        store_timeout_ms: 3000,
    }
}

pub fn test_mail_config() -> MailConfig {
    // Dead endpoint on purpose: delivery must fail in the worker without
    // failing the request that queued it.
    MailConfig {
        api_key: "test".to_string(),
        endpoint: "http://127.0.0.1:9/emails".to_string(),
        from: "noreply@test.local".to_string(),
    }
}

// Test data helpers
pub mod test_data {
    use orgnest::types::user::RSignup;

    pub fn sample_user() -> RSignup {
        RSignup {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "pw123".to_string(),
        }
    }

    pub fn sample_user_with_email(email: &str) -> RSignup {
        RSignup {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "pw123".to_string(),
        }
    }
}
