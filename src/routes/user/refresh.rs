use actix_web::{post, web};

use crate::auth::session::SessionManager;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{RRefreshToken, TokenPairRes};

#[post("/refresh-token")]
async fn refresh(
    _req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
    body: web::Json<RRefreshToken>,
) -> ApiResult<TokenPairRes> {
    let pair = sessions.refresh(&body.refresh_token).await?;

    Ok(ApiResponse::Ok(pair))
}
