use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::organization::ROrganizationUpdate;
use chrono::Utc;
use entity::organization::{
    ActiveModel as OrganizationActive, Entity as Organization, Model as OrganizationModel,
};
use entity::organization_member::{
    ActiveModel as MemberActive, Entity as Member, Model as MemberModel,
};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    /// Creates the organization and its first admin member in one txn.
    pub async fn create_organization(
        &self,
        name: String,
        description: String,
        creator: Uuid,
    ) -> Result<Uuid, AppError> {
        let oid = Uuid::new_v4();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        match Organization::insert(OrganizationActive {
            id: Set(oid),
            name: Set(name),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await
        {
            Ok(_) => {}
            Err(err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::AlreadyExists);
                }
                return Err(err.into());
            }
        }

        Member::insert(MemberActive {
            organization_id: Set(oid),
            user_id: Set(creator),
            access_level: Set("admin".to_string()),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(oid)
    }

    pub async fn get_organization(&self, id: Uuid) -> Result<OrganizationModel, AppError> {
        Ok(Organization::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Organization not found".into()))?)
    }

    pub async fn list_organizations(&self) -> Result<Vec<OrganizationModel>, AppError> {
        Ok(Organization::find().all(&self.database_connection).await?)
    }

    /// Only `name` and `description` are assignable here. The payload type is
    /// the allow-list.
    pub async fn update_organization(
        &self,
        id: Uuid,
        changes: ROrganizationUpdate,
    ) -> Result<OrganizationModel, AppError> {
        let organization = self.get_organization(id).await?;
        let mut am: OrganizationActive = organization.into();
        if let Some(name) = changes.name {
            am.name = Set(name);
        }
        if let Some(description) = changes.description {
            am.description = Set(description);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_organization(&self, id: Uuid) -> Result<(), AppError> {
        // Members go with it via FK cascade.
        let organization = self.get_organization(id).await?;
        organization.delete(&self.database_connection).await?;
        Ok(())
    }

    pub async fn is_member(&self, organization_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        Ok(Member::find_by_id((organization_id, user_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn add_member(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
        access_level: &str,
    ) -> Result<(), AppError> {
        let now = Utc::now();
        match Member::insert(MemberActive {
            organization_id: Set(organization_id),
            user_id: Set(user_id),
            access_level: Set(access_level.to_string()),
            created_at: Set(now),
        })
        .exec(&self.database_connection)
        .await
        {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(AppError::NotFound),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn list_members(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<(MemberModel, UserModel)>, AppError> {
        let rows = Member::find()
            .filter(entity::organization_member::Column::OrganizationId.eq(organization_id))
            .find_also_related(User)
            .all(&self.database_connection)
            .await?;
        // The FK guarantees the user side exists; drop any row that lost it.
        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| user.map(|u| (member, u)))
            .collect())
    }
}
