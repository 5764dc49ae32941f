//! HTTP controllers for the profile API.

pub mod profile;
