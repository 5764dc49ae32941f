use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A profile as returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    /// Uuid of the owning user
    pub user_uuid: String,
    pub email: String,
    pub display_name: String,
    pub bio: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::profile::Model> for ProfileDto {
    fn from(model: entity::profile::Model) -> Self {
        Self {
            id: model.id,
            user_uuid: model.user_uuid,
            email: model.email,
            display_name: model.display_name,
            bio: model.bio,
            created_at: model.created_at,
        }
    }
}

/// Body of a create request. The owner is always the authenticated caller.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateProfileDto {
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
}

/// Body of a full update.
///
/// Read-only fields (`id`, `user_uuid`, `created_at`) are not part of the schema, so any
/// value a client sends for them is dropped during deserialization.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileDto {
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
}
