//! In-process HTTP client for an axum application.
//!
//! Requests are dispatched straight into the `Router` with `tower::ServiceExt::oneshot`, so no
//! socket is opened. Authentication is forced: the configured identity is attached to every
//! request's extensions, where the application's extractor picks it up as if an
//! authentication layer had put it there.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{constant::JSON_CONTENT_TYPE, error::TestError, payload::Payload};

/// Response of a single request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    /// Deserialized body, present only for non-empty JSON responses.
    pub data: Option<Value>,
    /// Raw body.
    pub body: Bytes,
}

impl ApiResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Body as a JSON object, e.g. a serialized item.
    ///
    /// # Returns
    /// - `Ok(&Payload)` - Body parsed to a JSON object
    /// - `Err(TestError::UnexpectedBody)` - Body is not a JSON object
    pub fn data_object(&self) -> Result<&Payload, TestError> {
        match &self.data {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(self.unexpected_body("object")),
        }
    }

    /// Body as a JSON array, e.g. a list of items.
    pub fn data_array(&self) -> Result<&Vec<Value>, TestError> {
        match &self.data {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(self.unexpected_body("array")),
        }
    }

    fn unexpected_body(&self, expected: &'static str) -> TestError {
        TestError::UnexpectedBody {
            method: self.method.clone(),
            url: self.url.clone(),
            expected,
            body: self.text(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Client bound to one application, with a forced-authentication slot.
#[derive(Clone)]
pub struct ApiClient<I> {
    app: Router,
    identity: Option<I>,
}

impl<I> ApiClient<I>
where
    I: Clone + Send + Sync + 'static,
{
    pub fn new(app: Router) -> Self {
        Self {
            app,
            identity: None,
        }
    }

    /// Attribute subsequent requests to `identity`, or make them anonymous with `None`.
    pub fn force_authenticate(&mut self, identity: Option<I>) {
        self.identity = identity;
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub async fn get(&self, url: &str) -> Result<ApiResponse, TestError> {
        self.request(Method::GET, url, None).await
    }

    pub async fn post(&self, url: &str, payload: &Payload) -> Result<ApiResponse, TestError> {
        self.request(Method::POST, url, Some(payload)).await
    }

    pub async fn put(&self, url: &str, payload: &Payload) -> Result<ApiResponse, TestError> {
        self.request(Method::PUT, url, Some(payload)).await
    }

    pub async fn delete(&self, url: &str) -> Result<ApiResponse, TestError> {
        self.request(Method::DELETE, url, None).await
    }

    /// Send one request through the router.
    ///
    /// # Returns
    /// - `Ok(ApiResponse)` - Any response, whatever its status
    /// - `Err(TestError::Http)` - The request could not be built
    /// - `Err(TestError::Json)` - Payload or JSON response body failed to (de)serialize
    /// - `Err(TestError::Body)` - Response body could not be read
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Payload>,
    ) -> Result<ApiResponse, TestError> {
        let mut builder = Request::builder().method(method.clone()).uri(url);
        let body = match payload {
            Some(payload) => {
                builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
                Body::from(serde_json::to_vec(payload)?)
            }
            None => Body::empty(),
        };

        let mut request = builder.body(body)?;
        if let Some(identity) = &self.identity {
            request.extensions_mut().insert(identity.clone());
        }

        let response = match self.app.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(JSON_CONTENT_TYPE));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let data = if is_json && !body.is_empty() {
            Some(serde_json::from_slice(&body)?)
        } else {
            None
        };

        tracing::debug!(
            method = %method,
            url = %url,
            status = %status,
            authenticated = self.identity.is_some(),
            "API request"
        );

        Ok(ApiResponse {
            method,
            url: url.to_string(),
            status,
            data,
            body,
        })
    }
}
