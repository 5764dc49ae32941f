//! Request, response and application state types.

pub mod api;
pub mod app;
pub mod auth;
pub mod profile;
