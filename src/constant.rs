//! Default values used when building identities and requests.

/// Email given to [`AuthUser`](crate::AuthUser) identities unless overridden.
pub static DEFAULT_AUTH_EMAIL: &str = "foo@example.com";

/// Content type of request payloads.
pub static JSON_CONTENT_TYPE: &str = "application/json";

/// Name of the primary-key parameter of detail routes.
pub static PK_PARAM: &str = "pk";
