//! Ownership-scoped CRUD conformance suite for axum REST APIs.
//!
//! A resource describes itself by implementing [`OwnershipCrud`] (configuration, payload
//! builders and the resource-specific cases). In exchange it gets every case of
//! [`CrudSuite`]: owner access, anonymous and non-owner denial, full update and read-only
//! field protection. Cases talk to the application in-process through an [`Endpoint`].
//!
//! Generate one test per case with [`ownership_crud_tests!`], or run them all at once with
//! [`run_suite`] and inspect the [`SuiteReport`].

pub mod assert;
pub mod client;
pub mod config;
pub mod constant;
pub mod endpoint;
pub mod error;
pub mod fixture;
pub mod identity;
pub mod logging;
pub mod payload;
pub mod report;
pub mod route;
pub mod store;
pub mod suite;

mod macros;

pub use async_trait::async_trait;

pub use client::{ApiClient, ApiResponse};
pub use config::{ConfigError, SuiteConfig, SuiteConfigBuilder};
pub use endpoint::Endpoint;
pub use error::{FailureKind, TestError};
pub use fixture::{TestBuilder, TestContext};
pub use identity::AuthUser;
pub use payload::Payload;
pub use report::{run_suite, CaseOutcome, SuiteReport};
pub use route::{RouteError, RouteTable};
pub use store::ModelStore;
pub use suite::{Case, CrudSuite, OwnershipCrud};

pub mod prelude {
    pub use crate::{
        async_trait, ownership_crud_tests,
        payload::{into_payload, str_field},
        run_suite, AuthUser, Case, CrudSuite, Endpoint, ModelStore, OwnershipCrud, Payload,
        RouteTable, SuiteConfig, TestBuilder, TestError,
    };
}
