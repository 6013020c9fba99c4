use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::guard::AuthedUser;
use crate::db::postgres_service::PostgresService;
use crate::tasks::EmailQueue;
use crate::types::error::AppError;
use crate::types::mail::InvitationEmail;
use crate::types::organization::ROrganizationInvite;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/{organization_id}/invite")]
async fn invite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    mailer: web::Data<EmailQueue>,
    path: web::Path<String>,
    body: web::Json<ROrganizationInvite>,
    user: AuthedUser,
) -> ApiResult<Response> {
    let organization_id = Uuid::from_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("Invalid organization ID. Failed UUID parse.".to_string()))?;

    let organization = db.get_organization(organization_id).await?;
    let invited = db.get_user_by_email(&body.user_email).await?;

    if db.is_member(organization.id, invited.id).await? {
        return Err(AppError::AlreadyExists);
    }

    db.add_member(organization.id, invited.id, "member").await?;

    info!("queueing invitation email for {}", invited.email);
    mailer.enqueue(InvitationEmail {
        organization_name: organization.name,
        invited_email: invited.email,
        inviter_email: user.0.email,
    });

    Ok(ApiResponse::Ok(Response {
        message: "User invited successfully".to_string(),
    }))
}
