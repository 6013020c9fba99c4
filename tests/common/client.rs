use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use orgnest::auth::session::SessionManager;
use orgnest::db::postgres_service::PostgresService;
use orgnest::tasks::EmailQueue;
use orgnest::types::token::TokenPairRes;

use super::{test_auth_config, test_mail_config, TestContext};

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub sessions: web::Data<SessionManager>,
    pub mailer: web::Data<EmailQueue>,
}

impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        let sessions = web::Data::new(
            SessionManager::new(
                Arc::clone(&ctx.db),
                ctx.revocations.clone(),
                &test_auth_config(),
            )
            .expect("Failed to initialize SessionManager"),
        );
        let mailer = web::Data::new(EmailQueue::start(test_mail_config()));

        TestClient {
            db: Arc::clone(&ctx.db),
            sessions,
            mailer,
        }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(self.sessions.clone())
            .app_data(self.mailer.clone())
            .configure(orgnest::routes::configure_routes)
    }

    /// Signup + login in one go; returns the issued pair.
    #[allow(dead_code)]
    pub async fn create_logged_in_user(&self, email: Option<String>) -> (String, TokenPairRes) {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));

        self.sessions
            .signup("Test User".to_string(), email.clone(), "pw123")
            .await
            .expect("Failed to sign up user");

        let pair = self
            .sessions
            .login(&email, "pw123")
            .await
            .expect("Failed to log in user");

        (email, pair)
    }
}
