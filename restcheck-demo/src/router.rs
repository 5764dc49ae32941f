//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers the profile endpoints with their utoipa specifications and serves the collected
//! OpenAPI document as JSON at `/api/docs/openapi.json`.

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{controller, model::app::AppState};

/// Builds the API router with all profile endpoints and the OpenAPI document.
///
/// # Registered Endpoints
/// - `GET /api/profiles` - List the caller's profiles
/// - `POST /api/profiles` - Create a profile owned by the caller
/// - `GET /api/profiles/{id}` - Get one of the caller's profiles
/// - `PUT /api/profiles/{id}` - Update one of the caller's profiles
/// - `DELETE /api/profiles/{id}` - Delete one of the caller's profiles
/// - `GET /api/docs/openapi.json` - OpenAPI document
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Profiles", description = "Ownership-scoped profile API"), tags(
        (name = controller::profile::PROFILE_TAG, description = "Profile API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::profile::list_profiles,
            controller::profile::create_profile
        ))
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::update_profile,
            controller::profile::delete_profile
        ))
        .split_for_parts();

    routes.route(
        "/api/docs/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}

/// Builds the complete application with its state attached.
pub fn app(db: DatabaseConnection) -> Router {
    routes().with_state(AppState { db })
}
