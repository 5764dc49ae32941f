//! Access to a single REST resource family.

use std::{fmt::Display, sync::Arc};

use axum::Router;

use crate::{
    client::{ApiClient, ApiResponse},
    constant::PK_PARAM,
    error::TestError,
    payload::Payload,
    route::RouteTable,
};

/// API endpoint of one resource family.
///
/// Resolves `{basename}-list` and `{basename}-detail` through the route table and issues
/// requests with the current authentication state. A fresh endpoint is built for every case,
/// so identity set by one case never leaks into another.
pub struct Endpoint<I> {
    basename: String,
    routes: Arc<RouteTable>,
    client: ApiClient<I>,
}

impl<I> Endpoint<I>
where
    I: Clone + Send + Sync + 'static,
{
    pub fn new(basename: impl Into<String>, app: Router, routes: Arc<RouteTable>) -> Self {
        Self {
            basename: basename.into(),
            routes,
            client: ApiClient::new(app),
        }
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn list_url(&self) -> Result<String, TestError> {
        Ok(self.routes.reverse(&format!("{}-list", self.basename), &[])?)
    }

    pub fn detail_url(&self, pk: impl Display) -> Result<String, TestError> {
        let pk = pk.to_string();

        Ok(self
            .routes
            .reverse(&format!("{}-detail", self.basename), &[(PK_PARAM, &pk)])?)
    }

    /// Authenticate subsequent requests as `user`, or send them anonymously with `None`.
    pub fn set_user(&mut self, user: Option<I>) {
        self.client.force_authenticate(user);
    }

    pub async fn get(&self, pk: impl Display) -> Result<ApiResponse, TestError> {
        self.client.get(&self.detail_url(pk)?).await
    }

    pub async fn get_items(&self) -> Result<ApiResponse, TestError> {
        self.client.get(&self.list_url()?).await
    }

    pub async fn post(&self, payload: &Payload) -> Result<ApiResponse, TestError> {
        self.client.post(&self.list_url()?, payload).await
    }

    pub async fn put(&self, pk: impl Display, payload: &Payload) -> Result<ApiResponse, TestError> {
        self.client.put(&self.detail_url(pk)?, payload).await
    }

    pub async fn delete(&self, pk: impl Display) -> Result<ApiResponse, TestError> {
        self.client.delete(&self.detail_url(pk)?).await
    }
}
