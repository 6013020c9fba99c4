use actix_web::{put, web};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::routes::organization::organization_response;
use crate::types::error::AppError;
use crate::types::organization::{OrganizationRes, ROrganizationUpdate};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{organization_id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    body: web::Json<ROrganizationUpdate>,
) -> ApiResult<OrganizationRes> {
    let organization_id = Uuid::from_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("Invalid organization ID. Failed UUID parse.".to_string()))?;

    let organization = db
        .update_organization(organization_id, body.into_inner())
        .await?;

    Ok(ApiResponse::Ok(
        organization_response(&db, organization).await?,
    ))
}
