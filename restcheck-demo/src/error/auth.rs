use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request carries no authenticated principal")]
    NotAuthenticated,
    #[error("User {0} is inactive")]
    InactiveUser(Uuid),
    #[error("User {user} does not own profile ID {profile_id}")]
    NotOwner { user: Uuid, profile_id: i32 },
}

impl AuthError {
    fn not_authenticated() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication credentials were not provided".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => {
                tracing::debug!("{}", self);

                Self::not_authenticated()
            }
            Self::InactiveUser(user) => {
                tracing::debug!(user = %user, "{}", self);

                Self::not_authenticated()
            }
            Self::NotOwner { user, profile_id } => {
                tracing::debug!(user = %user, profile_id = %profile_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
