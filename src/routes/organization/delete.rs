use actix_web::{delete, web};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[delete("/{organization_id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<Response> {
    let organization_id = Uuid::from_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("Invalid organization ID. Failed UUID parse.".to_string()))?;

    db.delete_organization(organization_id).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Organization deleted successfully".to_string(),
    }))
}
