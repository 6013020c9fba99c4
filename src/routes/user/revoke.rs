use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::auth::guard::AuthedUser;
use crate::auth::session::SessionManager;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::RRefreshToken;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("")]
async fn revoke(
    _req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
    body: web::Json<RRefreshToken>,
    user: AuthedUser,
) -> ApiResult<Response> {
    sessions.revoke(&body.refresh_token, &user.0).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Refresh token revoked".to_string(),
    }))
}
