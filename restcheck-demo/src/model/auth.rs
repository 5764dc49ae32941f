//! Authenticated principal and its request extractor.
//!
//! Authentication is resolved upstream of the handlers: an authentication layer (or a test
//! client forcing authentication) places a [`Principal`] in the request extensions. Handlers
//! only ever read it back through [`CurrentUser`].

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::auth::AuthError;

/// The caller a request is attributed to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub uuid: Uuid,
    pub email: String,
    pub groups: Vec<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub subscription: serde_json::Value,
}

/// Extractor yielding the request's principal, if any.
///
/// Never rejects; handlers decide whether an anonymous request is acceptable by calling
/// [`CurrentUser::require`].
pub struct CurrentUser(pub Option<Principal>);

impl CurrentUser {
    /// Returns the authenticated, active principal.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Request is authenticated by an active principal
    /// - `Err(AuthError::NotAuthenticated)` - No principal is attached to the request
    /// - `Err(AuthError::InactiveUser)` - The principal's account is deactivated
    pub fn require(self) -> Result<Principal, AuthError> {
        let Some(principal) = self.0 else {
            return Err(AuthError::NotAuthenticated);
        };

        if !principal.is_active {
            return Err(AuthError::InactiveUser(principal.uuid));
        }

        Ok(principal)
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Principal>().cloned()))
    }
}
