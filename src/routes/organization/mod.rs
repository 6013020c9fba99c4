use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::organization::{MemberRes, OrganizationRes};

pub mod create;
pub mod delete;
pub mod get;
pub mod invite;
pub mod list;
pub mod update;

pub(crate) async fn organization_response(
    db: &PostgresService,
    organization: entity::organization::Model,
) -> Result<OrganizationRes, AppError> {
    let members = db
        .list_members(organization.id)
        .await?
        .into_iter()
        .map(|(member, user)| MemberRes {
            name: user.name,
            email: user.email,
            access_level: member.access_level,
        })
        .collect();

    Ok(OrganizationRes {
        id: organization.id,
        name: organization.name,
        description: organization.description,
        members,
    })
}
