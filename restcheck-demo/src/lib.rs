//! Ownership-scoped profile REST API.
//!
//! A small axum application exposing the `profile` resource with per-owner access control.
//! It plays the part of the host application under test in restcheck's integration tests,
//! and doubles as a reference for how a resource is expected to behave under the suite.

pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;

pub use router::app;
