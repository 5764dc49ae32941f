use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::profile::{CreateProfileDto, UpdateProfileDto};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new profile owned by `user_uuid`
    pub async fn create(
        &self,
        user_uuid: &str,
        profile: CreateProfileDto,
    ) -> Result<entity::profile::Model, DbErr> {
        let profile = entity::profile::ActiveModel {
            user_uuid: ActiveValue::Set(user_uuid.to_string()),
            email: ActiveValue::Set(profile.email),
            display_name: ActiveValue::Set(profile.display_name),
            bio: ActiveValue::Set(profile.bio),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(id).one(self.db).await
    }

    /// Gets every profile owned by `user_uuid`, oldest first
    pub async fn get_by_owner(
        &self,
        user_uuid: &str,
    ) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserUuid.eq(user_uuid))
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the writable fields of an existing profile
    ///
    /// Owner, ID and creation timestamp are never touched.
    pub async fn update(
        &self,
        profile: entity::profile::Model,
        update: UpdateProfileDto,
    ) -> Result<entity::profile::Model, DbErr> {
        let mut profile = profile.into_active_model();
        profile.email = ActiveValue::Set(update.email);
        profile.display_name = ActiveValue::Set(update.display_name);
        profile.bio = ActiveValue::Set(update.bio);

        profile.update(self.db).await
    }

    /// Deletes a profile
    ///
    /// Returns OK regardless of the profile existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Profile::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
