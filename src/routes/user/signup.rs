use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::auth::session::SessionManager;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RSignup;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/signup")]
async fn signup(
    _req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
    body: web::Json<RSignup>,
) -> ApiResult<Response> {
    let body = body.into_inner();
    sessions.signup(body.name, body.email, &body.password).await?;

    Ok(ApiResponse::Ok(Response {
        message: "User created successfully".to_string(),
    }))
}
