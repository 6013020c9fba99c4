use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::guard::AuthedUser;
use crate::db::postgres_service::PostgresService;
use crate::types::organization::ROrganizationCreate;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub id: String,
}

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<ROrganizationCreate>,
    user: AuthedUser,
) -> ApiResult<Response> {
    let body = body.into_inner();
    // The creator goes in as the first admin member.
    let organization_id = db
        .create_organization(body.name, body.description, user.0.id)
        .await?;

    Ok(ApiResponse::Ok(Response {
        id: organization_id.to_string(),
    }))
}
