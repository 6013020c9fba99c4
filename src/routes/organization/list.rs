use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::routes::organization::organization_response;
use crate::types::organization::OrganizationRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<OrganizationRes>> {
    let organizations = db.list_organizations().await?;

    let mut out = Vec::with_capacity(organizations.len());
    for organization in organizations {
        out.push(organization_response(&db, organization).await?);
    }

    Ok(ApiResponse::Ok(out))
}
