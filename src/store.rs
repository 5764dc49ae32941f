//! Persistence collaborator of a resource suite.

use std::fmt::Display;

use async_trait::async_trait;
use serde::Serialize;

use crate::{error::TestError, payload::Payload};

/// Direct access to the resource's storage, bypassing the HTTP layer.
///
/// Cases use it to set up fixtures and to verify what an API call actually persisted.
/// Implementations typically wrap a sea-orm connection to the same database the
/// application under test uses.
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// Persisted item; its serialized fields are its attributes.
    type Item: Serialize + Send + Sync;
    /// Primary key, rendered into detail URLs with `Display`.
    type Id: Display + Clone + Send + Sync;

    fn id_of(item: &Self::Item) -> Self::Id;

    /// Persist a new item built from `payload`.
    async fn create(&self, payload: &Payload) -> Result<Self::Item, TestError>;

    /// Fetch an item by primary key, failing with [`TestError::NotFound`] if it is absent.
    async fn get(&self, id: &Self::Id) -> Result<Self::Item, TestError>;

    async fn all(&self) -> Result<Vec<Self::Item>, TestError>;
}
