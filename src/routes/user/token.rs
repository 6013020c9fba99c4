use actix_web::{post, web};

use crate::auth::session::SessionManager;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{RLoginForm, TokenPairRes};

#[post("/token")]
async fn token(
    _req: actix_web::HttpRequest,
    sessions: web::Data<SessionManager>,
    form: web::Form<RLoginForm>,
) -> ApiResult<TokenPairRes> {
    let form = form.into_inner();
    let pair = sessions.login(&form.username, &form.password).await?;

    Ok(ApiResponse::Ok(pair))
}
