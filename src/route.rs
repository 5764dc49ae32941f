//! Named routes and URL reversal.
//!
//! axum routers cannot be introspected for named routes, so the suite resolves URLs through a
//! [`RouteTable`] registered alongside the router. Resource families follow the
//! `{basename}-list` / `{basename}-detail` naming convention, the detail route taking a `pk`
//! parameter.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Reverse for `{0}` not found; is the route registered?")]
    NoReverseMatch(String),
    #[error("Route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },
    #[error("Route `{route}` has no parameter `{param}`")]
    UnexpectedParam { route: String, param: String },
    #[error("Invalid value {value:?} for parameter `{param}` of route `{route}`")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },
    #[error("Route `{route}` has a malformed template {template:?}")]
    InvalidTemplate { route: String, template: String },
}

/// Route name to path template mapping, e.g. `profile-detail` → `/api/profiles/{pk}`.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single named route.
    ///
    /// Templates use axum's `{param}` placeholder syntax. Re-registering a name replaces
    /// the previous template.
    pub fn route(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.routes.insert(name.into(), template.into());
        self
    }

    /// Register the list and detail routes of a resource family.
    ///
    /// # Arguments
    /// - `basename` - Resource base name, e.g. `profile`
    /// - `prefix` - List path, e.g. `/api/profiles`; trailing slashes are dropped
    ///
    /// Registers `{basename}-list` → `{prefix}` and `{basename}-detail` → `{prefix}/{pk}`.
    pub fn resource(self, basename: &str, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');

        self.route(format!("{basename}-list"), prefix)
            .route(format!("{basename}-detail"), format!("{prefix}/{{pk}}"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Resolve a named route into a concrete path.
    ///
    /// Every placeholder must be supplied exactly by `params`, and values must be non-empty
    /// path segments.
    pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let template = self
            .routes
            .get(name)
            .ok_or_else(|| RouteError::NoReverseMatch(name.to_string()))?;

        let mut url = String::with_capacity(template.len());
        let mut placeholders = Vec::new();
        let mut rest = template.as_str();

        while let Some(start) = rest.find('{') {
            url.push_str(&rest[..start]);

            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                return Err(RouteError::InvalidTemplate {
                    route: name.to_string(),
                    template: template.clone(),
                });
            };

            let param = &after[..end];
            let value = params
                .iter()
                .find(|(key, _)| *key == param)
                .map(|(_, value)| *value)
                .ok_or_else(|| RouteError::MissingParam {
                    route: name.to_string(),
                    param: param.to_string(),
                })?;

            if value.is_empty() || value.contains('/') {
                return Err(RouteError::InvalidParam {
                    route: name.to_string(),
                    param: param.to_string(),
                    value: value.to_string(),
                });
            }

            url.push_str(value);
            placeholders.push(param);
            rest = &after[end + 1..];
        }
        url.push_str(rest);

        if let Some((param, _)) = params.iter().find(|(key, _)| !placeholders.contains(key)) {
            return Err(RouteError::UnexpectedParam {
                route: name.to_string(),
                param: param.to_string(),
            });
        }

        Ok(url)
    }
}
