//! Ownership-scoped CRUD test suite.
//!
//! A resource implements [`OwnershipCrud`]: it supplies a [`SuiteConfig`], two payload
//! builders and the three cases whose assertions are resource specific (create, list and
//! delete). Every implementor automatically gets [`CrudSuite`], which carries the fixed
//! authorization and data-integrity cases. `CrudSuite` is blanket-implemented, so those cases
//! cannot be overridden.
//!
//! Each case runs against a freshly built [`Endpoint`] (setup) that is dropped when the case
//! returns (teardown).

use std::fmt;

use async_trait::async_trait;
use axum::http::StatusCode;
use uuid::Uuid;

use crate::{
    assert::{assert_equal_item, assert_readonly_unchanged, expect_count, expect_status},
    client::ApiResponse,
    config::SuiteConfig,
    endpoint::Endpoint,
    error::TestError,
    identity::AuthUser,
    payload::Payload,
    store::ModelStore,
};

/// Every case of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Create,
    ListByOwner,
    GetByOwner,
    AnonymousGetDenied,
    GetNonOwnerDenied,
    PutOwner,
    AnonymousPutDenied,
    ReadonlyFields,
    Delete,
}

impl Case {
    pub const ALL: [Case; 9] = [
        Case::Create,
        Case::ListByOwner,
        Case::GetByOwner,
        Case::AnonymousGetDenied,
        Case::GetNonOwnerDenied,
        Case::PutOwner,
        Case::AnonymousPutDenied,
        Case::ReadonlyFields,
        Case::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Case::Create => "create",
            Case::ListByOwner => "list_by_owner",
            Case::GetByOwner => "get_by_owner",
            Case::AnonymousGetDenied => "anonymous_get_denied",
            Case::GetNonOwnerDenied => "get_non_owner_denied",
            Case::PutOwner => "put_owner",
            Case::AnonymousPutDenied => "anonymous_put_denied",
            Case::ReadonlyFields => "readonly_fields",
            Case::Delete => "delete",
        }
    }

    /// Whether the case is carried by [`CrudSuite`] rather than left to the resource.
    pub fn is_provided(self) -> bool {
        !matches!(self, Case::Create | Case::ListByOwner | Case::Delete)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contract a resource implements to be checked by the suite.
#[async_trait]
pub trait OwnershipCrud: Send + Sync {
    type Store: ModelStore;
    /// Principal type the application reads from request extensions.
    type Identity: Clone + Send + Sync + 'static;

    fn config(&self) -> &SuiteConfig<Self::Store, Self::Identity>;

    /// Payload complete enough to persist a valid item.
    ///
    /// # Arguments
    /// - `owner_id` - Owner to record on the item; synthesize one when `None`
    fn get_create_payload(&self, owner_id: Option<Uuid>) -> Payload;

    /// Mutated copy of `payload` used for a full update.
    ///
    /// # Arguments
    /// - `payload` - Payload the item was created from
    /// - `readonly` - Also attempt to change every configured read-only field
    fn get_update_payload(&self, payload: &Payload, readonly: bool) -> Payload;

    /// Owner can POST a create payload, and exactly that item gets stored.
    async fn test_create(&self, _endpoint: &mut Endpoint<Self::Identity>) -> Result<(), TestError> {
        Err(TestError::NotImplemented(Case::Create))
    }

    /// List returns only the items that belong to the authenticated owner.
    async fn test_list_by_owner(
        &self,
        _endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError> {
        Err(TestError::NotImplemented(Case::ListByOwner))
    }

    /// Owner can delete their item, and it is gone from storage.
    async fn test_delete(&self, _endpoint: &mut Endpoint<Self::Identity>) -> Result<(), TestError> {
        Err(TestError::NotImplemented(Case::Delete))
    }
}

/// Fixed cases every [`OwnershipCrud`] resource gets.
#[async_trait]
pub trait CrudSuite: OwnershipCrud {
    /// Fresh, anonymous endpoint for one case, bound to the configured basename, app and
    /// routes.
    fn setup(&self) -> Endpoint<Self::Identity>;

    /// Regular active user with the given (or a generated) id.
    fn auth_user(&self, user_id: Option<Uuid>) -> Self::Identity;

    /// Convert a stand-in user into the application's principal through `auth_user_model`.
    fn auth_user_from(&self, user: AuthUser) -> Self::Identity;

    /// Owner can get an item that belongs to them, and it is served as stored.
    ///
    /// # Returns
    /// - `Ok(())` - 200 and every served field loosely equals the stored item
    /// - `Err(TestError::UnexpectedStatus)` - Any other status
    /// - `Err(TestError::FieldMismatch)` - Served data differs from the stored item
    async fn test_get_by_owner(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError>;

    /// Anonymous GET of an existing item is rejected with 401.
    async fn test_anonymous_get_denied(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError>;

    /// GET by an authenticated user other than the owner is rejected with 403.
    async fn test_get_non_owner_denied(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError>;

    /// Owner can replace an item; the stored item then matches the update payload.
    ///
    /// # Returns
    /// - `Ok(())` - 200 and the re-fetched item loosely equals the update payload
    /// - `Err(TestError::UnexpectedStatus)` - Any other status
    /// - `Err(TestError::FieldMismatch)` - The update was not persisted as sent
    async fn test_put_owner(&self, endpoint: &mut Endpoint<Self::Identity>)
        -> Result<(), TestError>;

    /// Anonymous PUT of an existing item is rejected with 401.
    async fn test_anonymous_put_denied(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError>;

    /// Updates attempting to change read-only fields succeed without applying them, and
    /// never create a second item.
    async fn test_readonly_fields(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError>;

    /// Run one case between setup and teardown.
    ///
    /// # Arguments
    /// - `case` - Case to run; resource-specific cases dispatch to the `OwnershipCrud` overrides
    ///
    /// # Returns
    /// - `Ok(())` - The case passed
    /// - `Err(TestError)` - Classify with [`TestError::kind`]
    async fn run(&self, case: Case) -> Result<(), TestError>;
}

/// Persist an item owned by `owner`, then PUT its update payload as `auth_user`.
async fn update_as<T>(
    suite: &T,
    endpoint: &mut Endpoint<T::Identity>,
    owner: &AuthUser,
    auth_user: Option<T::Identity>,
    readonly: bool,
) -> Result<(<T::Store as ModelStore>::Id, Payload, ApiResponse), TestError>
where
    T: OwnershipCrud,
{
    let payload = suite.get_create_payload(Some(owner.uuid));
    let item = suite.config().model.create(&payload).await?;
    let item_id = <T::Store as ModelStore>::id_of(&item);

    let payload = suite.get_update_payload(&payload, readonly);
    endpoint.set_user(auth_user);
    let response = endpoint.put(&item_id, &payload).await?;

    Ok((item_id, payload, response))
}

#[async_trait]
impl<T> CrudSuite for T
where
    T: OwnershipCrud,
{
    fn setup(&self) -> Endpoint<Self::Identity> {
        let config = self.config();

        Endpoint::new(
            config.basename.clone(),
            config.app.clone(),
            config.routes.clone(),
        )
    }

    fn auth_user(&self, user_id: Option<Uuid>) -> Self::Identity {
        self.auth_user_from(AuthUser::new(user_id))
    }

    fn auth_user_from(&self, user: AuthUser) -> Self::Identity {
        (self.config().auth_user_model)(user)
    }

    async fn test_get_by_owner(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError> {
        let user_id = Uuid::new_v4();
        let item = self
            .config()
            .model
            .create(&self.get_create_payload(Some(user_id)))
            .await?;

        endpoint.set_user(Some(self.auth_user(Some(user_id))));
        let response = endpoint
            .get(<Self::Store as ModelStore>::id_of(&item))
            .await?;

        expect_status(&response, StatusCode::OK)?;

        // served data matches what is stored
        assert_equal_item(&item, response.data_object()?)
    }

    async fn test_anonymous_get_denied(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError> {
        let item = self
            .config()
            .model
            .create(&self.get_create_payload(None))
            .await?;

        let response = endpoint
            .get(<Self::Store as ModelStore>::id_of(&item))
            .await?;

        expect_status(&response, StatusCode::UNAUTHORIZED)
    }

    async fn test_get_non_owner_denied(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError> {
        let user_id = Uuid::new_v4();
        let item = self
            .config()
            .model
            .create(&self.get_create_payload(Some(user_id)))
            .await?;

        endpoint.set_user(Some(self.auth_user(None)));
        let response = endpoint
            .get(<Self::Store as ModelStore>::id_of(&item))
            .await?;

        expect_status(&response, StatusCode::FORBIDDEN)
    }

    async fn test_put_owner(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError> {
        let owner = AuthUser::new(None);
        let identity = self.auth_user_from(owner.clone());

        let (item_id, payload, response) =
            update_as(self, endpoint, &owner, Some(identity), false).await?;

        expect_status(&response, StatusCode::OK)?;

        let item = self.config().model.get(&item_id).await?;
        assert_equal_item(&item, &payload)
    }

    async fn test_anonymous_put_denied(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError> {
        let owner = AuthUser::new(None);

        let (_, _, response) = update_as(self, endpoint, &owner, None, false).await?;

        expect_status(&response, StatusCode::UNAUTHORIZED)
    }

    async fn test_readonly_fields(
        &self,
        endpoint: &mut Endpoint<Self::Identity>,
    ) -> Result<(), TestError> {
        let config = self.config();
        let owner = AuthUser::new(None);
        let identity = self.auth_user_from(owner.clone());

        let (item_id, payload, response) =
            update_as(self, endpoint, &owner, Some(identity), true).await?;

        expect_status(&response, StatusCode::OK)?;

        let item = config.model.get(&item_id).await?;
        assert_readonly_unchanged(&item, &payload, &config.readonly_fields)?;

        // the update must not have created a new item
        expect_count(1, config.model.all().await?.len())
    }

    async fn run(&self, case: Case) -> Result<(), TestError> {
        let mut endpoint = self.setup();

        tracing::debug!(case = %case, basename = %endpoint.basename(), "Running case");

        let result = match case {
            Case::Create => self.test_create(&mut endpoint).await,
            Case::ListByOwner => self.test_list_by_owner(&mut endpoint).await,
            Case::GetByOwner => self.test_get_by_owner(&mut endpoint).await,
            Case::AnonymousGetDenied => self.test_anonymous_get_denied(&mut endpoint).await,
            Case::GetNonOwnerDenied => self.test_get_non_owner_denied(&mut endpoint).await,
            Case::PutOwner => self.test_put_owner(&mut endpoint).await,
            Case::AnonymousPutDenied => self.test_anonymous_put_denied(&mut endpoint).await,
            Case::ReadonlyFields => self.test_readonly_fields(&mut endpoint).await,
            Case::Delete => self.test_delete(&mut endpoint).await,
        };

        drop(endpoint);

        result
    }
}
