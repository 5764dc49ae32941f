//! Stand-in principal for authenticated test requests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constant::DEFAULT_AUTH_EMAIL;

/// Lightweight authenticated identity.
///
/// Suites convert it into the application's own principal type through the configured
/// `auth_user_model` constructor. Ownership is established by matching `uuid` against the
/// owner-reference field of a resource item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uuid: Uuid,
    pub email: String,
    pub groups: Vec<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub subscription: serde_json::Value,
}

impl AuthUser {
    /// Create a regular, active, non-staff user.
    ///
    /// # Arguments
    /// - `user_id` - Identifier to use; a random v4 uuid is generated when `None`
    pub fn new(user_id: Option<Uuid>) -> Self {
        Self {
            uuid: user_id.unwrap_or_else(Uuid::new_v4),
            email: DEFAULT_AUTH_EMAIL.to_string(),
            groups: Vec::new(),
            is_active: true,
            is_staff: false,
            subscription: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_subscription(mut self, subscription: serde_json::Value) -> Self {
        self.subscription = subscription;
        self
    }

    /// String form of the identifier, as stored in owner-reference fields.
    pub fn id(&self) -> String {
        self.uuid.to_string()
    }
}
