use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Lookup that distinguishes "no such user" from a store failure. Login
    /// and refresh need the distinction to keep their 401s generic.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(self
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user. The unique index on email is the final arbiter;
    /// a concurrent duplicate surfaces as EmailAlreadyRegistered, not a 500.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::EmailAlreadyRegistered);
        }
        let uid = Uuid::new_v4();
        let now = Utc::now();

        match User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            refresh_token: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await
        {
            Ok(_) => Ok(uid),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::EmailAlreadyRegistered)
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Unconditional overwrite. Whatever was stored before no longer matches
    /// and is superseded from this point on.
    pub async fn set_refresh_token(
        &self,
        user_id: Uuid,
        refresh_token: Option<String>,
    ) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        am.refresh_token = Set(refresh_token);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    /// Compare-and-swap on the stored refresh token. Returns false when the
    /// stored value no longer equals `old`, i.e. a concurrent rotation won.
    pub async fn replace_refresh_token(
        &self,
        user_id: Uuid,
        old: &str,
        new: &str,
    ) -> Result<bool, AppError> {
        let result = User::update_many()
            .col_expr(entity::user::Column::RefreshToken, Expr::value(new))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::RefreshToken.eq(old))
            .exec(&self.database_connection)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
