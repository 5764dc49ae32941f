use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::ProfileRepository,
    error::{auth::AuthError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        auth::{CurrentUser, Principal},
        profile::{CreateProfileDto, ProfileDto, UpdateProfileDto},
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Base path of the profile resource; detail routes append `/{id}`.
pub static PROFILE_PATH: &str = "/api/profiles";

/// Fetches a profile and verifies the principal owns it
async fn get_owned_profile(
    repository: &ProfileRepository<'_>,
    principal: &Principal,
    id: i32,
) -> Result<entity::profile::Model, Error> {
    let Some(profile) = repository.get_by_id(id).await? else {
        return Err(Error::ProfileNotFound(id));
    };

    if profile.user_uuid != principal.uuid.to_string() {
        return Err(AuthError::NotOwner {
            user: principal.uuid,
            profile_id: id,
        }
        .into());
    }

    Ok(profile)
}

/// List profiles owned by the authenticated user
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profiles owned by the caller", body = Vec<ProfileDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_profiles(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let principal = user.require()?;
    let repository = ProfileRepository::new(&state.db);

    let profiles: Vec<ProfileDto> = repository
        .get_by_owner(&principal.uuid.to_string())
        .await?
        .into_iter()
        .map(ProfileDto::from)
        .collect();

    Ok((StatusCode::OK, Json(profiles)))
}

/// Create a profile owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    request_body = CreateProfileDto,
    responses(
        (status = 201, description = "Profile created", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(profile): Json<CreateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let principal = user.require()?;
    let repository = ProfileRepository::new(&state.db);

    let profile = repository
        .create(&principal.uuid.to_string(), profile)
        .await?;

    tracing::debug!(profile_id = %profile.id, user = %principal.uuid, "Created profile");

    Ok((StatusCode::CREATED, Json(ProfileDto::from(profile))))
}

/// Get a profile owned by the authenticated user
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile found", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Profile belongs to another user", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let principal = user.require()?;
    let repository = ProfileRepository::new(&state.db);

    let profile = get_owned_profile(&repository, &principal, id).await?;

    Ok((StatusCode::OK, Json(ProfileDto::from(profile))))
}

/// Replace the writable fields of a profile owned by the authenticated user
///
/// `id`, `user_uuid` and `created_at` are read-only; values sent for them are ignored.
#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Profile belongs to another user", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(update): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let principal = user.require()?;
    let repository = ProfileRepository::new(&state.db);

    let profile = get_owned_profile(&repository, &principal, id).await?;
    let profile = repository.update(profile, update).await?;

    Ok((StatusCode::OK, Json(ProfileDto::from(profile))))
}

/// Delete a profile owned by the authenticated user
#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Profile belongs to another user", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let principal = user.require()?;
    let repository = ProfileRepository::new(&state.db);

    let profile = get_owned_profile(&repository, &principal, id).await?;
    repository.delete(profile.id).await?;

    tracing::debug!(profile_id = %id, user = %principal.uuid, "Deleted profile");

    Ok(StatusCode::NO_CONTENT)
}
