use actix_web::{get, web};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::routes::organization::organization_response;
use crate::types::error::AppError;
use crate::types::organization::OrganizationRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{organization_id}")]
async fn get(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<OrganizationRes> {
    let organization_id = Uuid::from_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("Invalid organization ID. Failed UUID parse.".to_string()))?;

    let organization = db.get_organization(organization_id).await?;

    Ok(ApiResponse::Ok(
        organization_response(&db, organization).await?,
    ))
}
