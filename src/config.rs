//! Per-resource suite configuration.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::{identity::AuthUser, route::RouteTable};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required suite setting: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for suite setting {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Everything a resource suite needs to know about the resource under test.
pub struct SuiteConfig<S, I> {
    /// Persistence collaborator used for fixtures and verification.
    pub model: S,
    /// Builds the application's principal from a stand-in identity.
    pub auth_user_model: fn(AuthUser) -> I,
    /// Route family base name, resolved as `{basename}-list` / `{basename}-detail`.
    pub basename: String,
    /// Fields the API must accept in updates but never persist.
    pub readonly_fields: Vec<String>,
    /// Application under test.
    pub app: Router,
    pub routes: Arc<RouteTable>,
}

impl<S, I> SuiteConfig<S, I> {
    pub fn builder() -> SuiteConfigBuilder<S, I> {
        SuiteConfigBuilder::default()
    }
}

/// Builder for [`SuiteConfig`].
///
/// `model`, `auth_user_model`, `basename`, `app` and `routes` are required;
/// `readonly_fields` defaults to none.
pub struct SuiteConfigBuilder<S, I> {
    model: Option<S>,
    auth_user_model: Option<fn(AuthUser) -> I>,
    basename: Option<String>,
    readonly_fields: Vec<String>,
    app: Option<Router>,
    routes: Option<RouteTable>,
}

impl<S, I> Default for SuiteConfigBuilder<S, I> {
    fn default() -> Self {
        Self {
            model: None,
            auth_user_model: None,
            basename: None,
            readonly_fields: Vec::new(),
            app: None,
            routes: None,
        }
    }
}

impl<S, I> SuiteConfigBuilder<S, I> {
    pub fn model(mut self, model: S) -> Self {
        self.model = Some(model);
        self
    }

    pub fn auth_user_model(mut self, constructor: fn(AuthUser) -> I) -> Self {
        self.auth_user_model = Some(constructor);
        self
    }

    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    pub fn readonly_fields<F, T>(mut self, fields: F) -> Self
    where
        F: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.readonly_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn app(mut self, app: Router) -> Self {
        self.app = Some(app);
        self
    }

    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// # Returns
    /// - `Ok(SuiteConfig)` - All required settings present
    /// - `Err(ConfigError::MissingField)` - A required setting was never supplied
    /// - `Err(ConfigError::InvalidValue)` - Blank basename or read-only field name
    pub fn build(self) -> Result<SuiteConfig<S, I>, ConfigError> {
        let basename = self.basename.ok_or(ConfigError::MissingField("basename"))?;
        if basename.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "basename",
                reason: "must not be blank".to_string(),
            });
        }

        if self.readonly_fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "readonly_fields",
                reason: "field names must not be blank".to_string(),
            });
        }

        Ok(SuiteConfig {
            model: self.model.ok_or(ConfigError::MissingField("model"))?,
            auth_user_model: self
                .auth_user_model
                .ok_or(ConfigError::MissingField("auth_user_model"))?,
            basename,
            readonly_fields: self.readonly_fields,
            app: self.app.ok_or(ConfigError::MissingField("app"))?,
            routes: Arc::new(self.routes.ok_or(ConfigError::MissingField("routes"))?),
        })
    }
}
