use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A user profile owned by the principal whose uuid is stored in `user_uuid`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_uuid: String,
    pub email: String,
    pub display_name: String,
    pub bio: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
