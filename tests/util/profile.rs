use axum::{http::StatusCode, Router};
use entity::prelude::Profile;
use restcheck::{
    assert::{assert_equal_item, expect_count, expect_status, loose_string},
    prelude::*,
};
use restcheck_demo::{
    controller::profile::PROFILE_PATH,
    data::ProfileRepository,
    model::{auth::Principal, profile::CreateProfileDto},
};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde_json::json;
use uuid::Uuid;

/// Builds the demo application's principal from a stand-in user.
pub fn principal(user: AuthUser) -> Principal {
    Principal {
        uuid: user.uuid,
        email: user.email,
        groups: user.groups,
        is_active: user.is_active,
        is_staff: user.is_staff,
        subscription: user.subscription,
    }
}

/// Profile storage accessed directly, next to the API.
pub struct ProfileStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ModelStore for ProfileStore {
    type Item = entity::profile::Model;
    type Id = i32;

    fn id_of(item: &Self::Item) -> Self::Id {
        item.id
    }

    async fn create(&self, payload: &Payload) -> Result<Self::Item, TestError> {
        let repository = ProfileRepository::new(&self.db);

        let profile = CreateProfileDto {
            email: str_field(payload, "email")?.to_string(),
            display_name: str_field(payload, "display_name")?.to_string(),
            bio: payload
                .get("bio")
                .and_then(|bio| bio.as_str())
                .unwrap_or_default()
                .to_string(),
        };

        Ok(repository
            .create(str_field(payload, "user_uuid")?, profile)
            .await?)
    }

    async fn get(&self, id: &Self::Id) -> Result<Self::Item, TestError> {
        let repository = ProfileRepository::new(&self.db);

        repository
            .get_by_id(*id)
            .await?
            .ok_or_else(|| TestError::NotFound(id.to_string()))
    }

    async fn all(&self) -> Result<Vec<Self::Item>, TestError> {
        Ok(Profile::find()
            .order_by_asc(entity::profile::Column::Id)
            .all(&self.db)
            .await?)
    }
}

pub struct ProfileSuite {
    config: SuiteConfig<ProfileStore, Principal>,
}

impl ProfileSuite {
    /// Suite against the demo application over a fresh database.
    pub async fn new() -> Result<Self, TestError> {
        Self::with_app(restcheck_demo::app).await
    }

    /// Suite against the application built by `app` over a fresh database.
    pub async fn with_app(app: fn(DatabaseConnection) -> Router) -> Result<Self, TestError> {
        Self::with_basename(app, "profile").await
    }

    pub async fn with_basename(
        app: fn(DatabaseConnection) -> Router,
        basename: &str,
    ) -> Result<Self, TestError> {
        let test = TestBuilder::new().with_table(Profile).build().await?;

        let config = SuiteConfig::builder()
            .model(ProfileStore {
                db: test.db.clone(),
            })
            .auth_user_model(principal)
            .basename(basename)
            .readonly_fields(["id", "user_uuid", "created_at"])
            .app(app(test.db))
            .routes(RouteTable::new().resource("profile", PROFILE_PATH))
            .build()?;

        Ok(Self { config })
    }

    pub fn store(&self) -> &ProfileStore {
        &self.config.model
    }
}

#[async_trait]
impl OwnershipCrud for ProfileSuite {
    type Store = ProfileStore;
    type Identity = Principal;

    fn config(&self) -> &SuiteConfig<ProfileStore, Principal> {
        &self.config
    }

    fn get_create_payload(&self, owner_id: Option<Uuid>) -> Payload {
        let owner_id = owner_id.unwrap_or_else(Uuid::new_v4);

        let mut payload = Payload::new();
        payload.insert("user_uuid".to_string(), json!(owner_id.to_string()));
        payload.insert("email".to_string(), json!("foo@example.com"));
        payload.insert("display_name".to_string(), json!("Foo"));
        payload.insert("bio".to_string(), json!("Hello"));
        payload
    }

    fn get_update_payload(&self, payload: &Payload, readonly: bool) -> Payload {
        let mut payload = payload.clone();
        payload.insert("email".to_string(), json!("bar@example.com"));
        payload.insert("display_name".to_string(), json!("Bar"));
        payload.insert("bio".to_string(), json!("Updated"));

        if readonly {
            payload.insert("id".to_string(), json!(i32::MAX));
            payload.insert("user_uuid".to_string(), json!(Uuid::new_v4().to_string()));
            payload.insert("created_at".to_string(), json!("2000-01-01T00:00:00"));
        }

        payload
    }

    async fn test_create(&self, endpoint: &mut Endpoint<Principal>) -> Result<(), TestError> {
        let user_id = Uuid::new_v4();
        let payload = self.get_create_payload(Some(user_id));

        endpoint.set_user(Some(self.auth_user(Some(user_id))));
        let response = endpoint.post(&payload).await?;

        expect_status(&response, StatusCode::CREATED)?;

        let items = self.store().all().await?;
        expect_count(1, items.len())?;
        assert_equal_item(&items[0], &payload)?;

        // response is the stored item
        assert_equal_item(&items[0], response.data_object()?)
    }

    async fn test_list_by_owner(
        &self,
        endpoint: &mut Endpoint<Principal>,
    ) -> Result<(), TestError> {
        let user_id = Uuid::new_v4();
        for _ in 0..2 {
            self.store()
                .create(&self.get_create_payload(Some(user_id)))
                .await?;
        }
        self.store().create(&self.get_create_payload(None)).await?;

        endpoint.set_user(Some(self.auth_user(Some(user_id))));
        let response = endpoint.get_items().await?;

        expect_status(&response, StatusCode::OK)?;

        let items = response.data_array()?;
        expect_count(2, items.len())?;
        for item in items {
            let owner = item.get("user_uuid").cloned().unwrap_or_default();
            if owner != json!(user_id.to_string()) {
                return Err(TestError::FieldMismatch {
                    field: "user_uuid".to_string(),
                    expected: user_id.to_string(),
                    actual: loose_string(&owner),
                });
            }
        }

        Ok(())
    }

    async fn test_delete(&self, endpoint: &mut Endpoint<Principal>) -> Result<(), TestError> {
        let user_id = Uuid::new_v4();
        let item = self
            .store()
            .create(&self.get_create_payload(Some(user_id)))
            .await?;

        endpoint.set_user(Some(self.auth_user(Some(user_id))));
        let response = endpoint.delete(item.id).await?;

        expect_status(&response, StatusCode::NO_CONTENT)?;
        expect_count(0, self.store().all().await?.len())
    }
}
