//! Ownership rules exercised directly through the endpoint, outside the fixed cases.

use axum::http::StatusCode;
use restcheck::{assert::expect_status, prelude::*, RouteError};
use uuid::Uuid;

use crate::util::ProfileSuite;

/// A non-owner sharing the owner's default email is still denied.
#[tokio::test]
async fn non_owner_with_same_email_is_forbidden() -> Result<(), TestError> {
    let suite = ProfileSuite::new().await?;
    let mut endpoint = suite.setup();

    let item = suite
        .store()
        .create(&suite.get_create_payload(Some(Uuid::new_v4())))
        .await?;

    let stranger = AuthUser::new(None).with_email("foo@example.com");
    endpoint.set_user(Some(suite.auth_user_from(stranger)));
    let response = endpoint.get(item.id).await?;

    expect_status(&response, StatusCode::FORBIDDEN)
}

#[tokio::test]
async fn staff_non_owner_is_forbidden() -> Result<(), TestError> {
    let suite = ProfileSuite::new().await?;
    let mut endpoint = suite.setup();

    let item = suite
        .store()
        .create(&suite.get_create_payload(None))
        .await?;

    let mut staff = AuthUser::new(None);
    staff.is_staff = true;
    endpoint.set_user(Some(suite.auth_user_from(staff)));
    let response = endpoint.get(item.id).await?;

    expect_status(&response, StatusCode::FORBIDDEN)
}

#[tokio::test]
async fn inactive_owner_is_unauthorized() -> Result<(), TestError> {
    let suite = ProfileSuite::new().await?;
    let mut endpoint = suite.setup();

    let mut owner = AuthUser::new(None);
    let item = suite
        .store()
        .create(&suite.get_create_payload(Some(owner.uuid)))
        .await?;

    owner.is_active = false;
    endpoint.set_user(Some(suite.auth_user_from(owner)));
    let response = endpoint.get(item.id).await?;

    expect_status(&response, StatusCode::UNAUTHORIZED)
}

/// A rejected update leaves the stored item untouched.
#[tokio::test]
async fn non_owner_put_is_forbidden() -> Result<(), TestError> {
    let suite = ProfileSuite::new().await?;
    let mut endpoint = suite.setup();

    let payload = suite.get_create_payload(None);
    let item = suite.store().create(&payload).await?;

    endpoint.set_user(Some(suite.auth_user(None)));
    let response = endpoint
        .put(item.id, &suite.get_update_payload(&payload, false))
        .await?;

    expect_status(&response, StatusCode::FORBIDDEN)?;
    assert_eq!(suite.store().get(&item.id).await?, item);

    Ok(())
}

#[tokio::test]
async fn missing_item_is_not_found() -> Result<(), TestError> {
    let suite = ProfileSuite::new().await?;
    let mut endpoint = suite.setup();

    endpoint.set_user(Some(suite.auth_user(None)));
    let response = endpoint.get(404).await?;

    expect_status(&response, StatusCode::NOT_FOUND)
}

#[tokio::test]
async fn anonymous_list_is_unauthorized() -> Result<(), TestError> {
    let suite = ProfileSuite::new().await?;
    let endpoint = suite.setup();

    suite.store().create(&suite.get_create_payload(None)).await?;
    let response = endpoint.get_items().await?;

    expect_status(&response, StatusCode::UNAUTHORIZED)
}

/// Identity set during one case does not carry over to the next endpoint.
#[tokio::test]
async fn setup_starts_anonymous() -> Result<(), TestError> {
    let suite = ProfileSuite::new().await?;

    let mut first = suite.setup();
    first.set_user(Some(suite.auth_user(None)));
    expect_status(&first.get_items().await?, StatusCode::OK)?;

    let second = suite.setup();
    expect_status(&second.get_items().await?, StatusCode::UNAUTHORIZED)
}

#[tokio::test]
async fn unknown_basename_is_a_route_error() -> Result<(), TestError> {
    let suite = ProfileSuite::with_basename(restcheck_demo::app, "account").await?;

    let result = suite.run(Case::GetByOwner).await;

    assert!(matches!(
        result,
        Err(TestError::Route(RouteError::NoReverseMatch(name))) if name == "account-detail"
    ));

    Ok(())
}
