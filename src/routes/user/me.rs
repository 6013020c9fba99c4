use actix_web::get;

use crate::auth::guard::AuthedUser;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("/me")]
async fn me(_req: actix_web::HttpRequest, user: AuthedUser) -> ApiResult<UserRes> {
    Ok(ApiResponse::Ok(UserRes {
        name: user.0.name,
        email: user.0.email,
    }))
}
