//! The fixed cases must catch an API that breaks the ownership rules.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use entity::prelude::Profile;
use restcheck::{prelude::*, FailureKind};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, IntoActiveModel};
use serde_json::Value;

use crate::util::ProfileSuite;

fn body_str(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

async fn find(db: &DatabaseConnection, id: i32) -> Result<entity::profile::Model, StatusCode> {
    Profile::find_by_id(id)
        .one(db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)
}

/// Serves any profile to anyone.
async fn get_unchecked(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<entity::profile::Model>, StatusCode> {
    Ok(Json(find(&db, id).await?))
}

/// Applies every field of the body, owner included.
async fn put_everything(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<entity::profile::Model>, StatusCode> {
    let mut profile = find(&db, id).await?.into_active_model();
    profile.user_uuid = ActiveValue::Set(body_str(&body, "user_uuid"));
    profile.email = ActiveValue::Set(body_str(&body, "email"));
    profile.display_name = ActiveValue::Set(body_str(&body, "display_name"));
    profile.bio = ActiveValue::Set(body_str(&body, "bio"));

    let profile = profile
        .update(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(profile))
}

/// Stores the update as a new profile instead of replacing the old one.
async fn put_as_insert(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<entity::profile::Model>, StatusCode> {
    let existing = find(&db, id).await?;

    let profile = entity::profile::ActiveModel {
        user_uuid: ActiveValue::Set(existing.user_uuid),
        email: ActiveValue::Set(body_str(&body, "email")),
        display_name: ActiveValue::Set(body_str(&body, "display_name")),
        bio: ActiveValue::Set(body_str(&body, "bio")),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(profile))
}

/// Answers 200 with the updated profile but never saves it.
async fn put_discarded(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<entity::profile::Model>, StatusCode> {
    let mut profile = find(&db, id).await?;
    profile.email = body_str(&body, "email");
    profile.display_name = body_str(&body, "display_name");
    profile.bio = body_str(&body, "bio");

    Ok(Json(profile))
}

/// Serves the stored profile with a different email.
async fn get_rewritten(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<entity::profile::Model>, StatusCode> {
    let mut profile = find(&db, id).await?;
    profile.email = format!("rewritten.{}", profile.email);

    Ok(Json(profile))
}

fn leaky_app(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/api/profiles/{id}", get(get_unchecked).put(put_everything))
        .with_state(db)
}

fn duplicating_app(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/api/profiles/{id}", get(get_unchecked).put(put_as_insert))
        .with_state(db)
}

fn discarding_app(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/api/profiles/{id}", get(get_unchecked).put(put_discarded))
        .with_state(db)
}

fn rewriting_app(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/api/profiles/{id}", get(get_rewritten))
        .with_state(db)
}

#[tokio::test]
async fn anonymous_read_is_reported() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(leaky_app).await?;

    let err = suite
        .run(Case::AnonymousGetDenied)
        .await
        .expect_err("anonymous read must fail the case");

    assert_eq!(err.kind(), FailureKind::Assertion);
    assert!(matches!(
        err,
        TestError::UnexpectedStatus { expected, actual, .. }
            if expected == StatusCode::UNAUTHORIZED && actual == StatusCode::OK
    ));

    Ok(())
}

#[tokio::test]
async fn non_owner_read_is_reported() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(leaky_app).await?;

    let result = suite.run(Case::GetNonOwnerDenied).await;

    assert!(matches!(
        result,
        Err(TestError::UnexpectedStatus { expected, .. }) if expected == StatusCode::FORBIDDEN
    ));

    Ok(())
}

#[tokio::test]
async fn applied_readonly_field_is_reported() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(leaky_app).await?;

    let result = suite.run(Case::ReadonlyFields).await;

    assert!(matches!(
        result,
        Err(TestError::ReadonlyFieldChanged { field, .. }) if field == "user_uuid"
    ));

    Ok(())
}

#[tokio::test]
async fn duplicating_update_is_reported() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(duplicating_app).await?;

    let result = suite.run(Case::ReadonlyFields).await;

    assert!(matches!(
        result,
        Err(TestError::UnexpectedCount { expected: 1, actual: 2 })
    ));

    Ok(())
}

/// A correct owner update still passes against the leaky application.
#[tokio::test]
async fn owner_update_passes_on_leaky_app() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(leaky_app).await?;

    suite.run(Case::PutOwner).await
}

#[tokio::test]
async fn anonymous_update_is_reported() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(leaky_app).await?;

    let result = suite.run(Case::AnonymousPutDenied).await;

    assert!(matches!(
        result,
        Err(TestError::UnexpectedStatus { expected, actual, .. })
            if expected == StatusCode::UNAUTHORIZED && actual == StatusCode::OK
    ));

    Ok(())
}

/// A 200 on PUT is not enough; the update must reach storage.
#[tokio::test]
async fn unsaved_update_is_reported() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(discarding_app).await?;

    let result = suite.run(Case::PutOwner).await;

    assert!(matches!(
        result,
        Err(TestError::FieldMismatch { field, .. })
            if ["bio", "display_name", "email"].contains(&field.as_str())
    ));

    Ok(())
}

#[tokio::test]
async fn served_data_differing_from_storage_is_reported() -> Result<(), TestError> {
    let suite = ProfileSuite::with_app(rewriting_app).await?;

    let result = suite.run(Case::GetByOwner).await;

    assert!(matches!(
        result,
        Err(TestError::FieldMismatch { field, expected, .. })
            if field == "email" && expected.starts_with("rewritten.")
    ));

    Ok(())
}
