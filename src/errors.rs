use argon2::password_hash::Error as ArError;
use axum::{http::StatusCode, response::IntoResponse};
use jsonwebtoken::errors::Error as JWError;
use surrealdb::Error as SError;

use thiserror::Error;
use tracing::error;

use crate::config::ConfigError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Argon 2 Error: {0}")]
    Argon2Error(#[from] ArError),

    #[error("Json web token Error: {0}")]
    JwtError(#[from] JWError),

    #[error("SurrealDb Error: {0}")]
    SurrealError(#[from] SError),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Http client Error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Config Error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Validator Error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Json Rejection Error: {0}")]
    AxumJsonRejection(#[from] axum::extract::rejection::JsonRejection),

    #[error("Invalid login detail")]
    InvalidLoginDetails,

    #[error("User with email `{0}` already exists!")]
    EmailExist(String),

    #[error("Invalid or expired invitation token.")]
    InvalidInvitation,

    #[error("This invitation was sent to a different email address.")]
    InvitationEmailMismatch,

    #[error("User not found. You need a valid invitation to access this site.")]
    UnrecognizedUser,

    #[error(
        "Access denied. Your email is not authorized. Please contact an administrator for an invitation."
    )]
    EmailNotAuthorized,

    #[error("You do not have permission to access this page.")]
    PermissionDenied,

    #[error("You cannot change your own role")]
    CannotChangeOwnRole,

    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    #[error("Google sign-in is not configured")]
    GoogleSignInDisabled,

    #[error("Not Found")]
    NotFound,

    #[error("Internal Server Error")]
    InternalServerError,

    // ! Session
    #[error("Missing authorization token")]
    MissingToken,
    #[error("Invalid authorization token")]
    InvalidToken,
    #[error("Invalid authorization scheme")]
    InvalidScheme,
    #[error("Token expired")]
    TokenExpired,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::Argon2Error(error) => {
                error!("Argon 2 Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::JwtError(error) => {
                error!("JWT Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::SurrealError(error) => {
                error!("Surreal Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::IoError(error) => {
                error!("Io Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::HttpError(error) => {
                error!("Http client Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ConfigError(error) => {
                error!("Config Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ValidationError(error) => {
                let message = format!("Input validation error: [{}]", error).replace('\n', ", ");
                error!("Validation Error:{:#?}", error);
                (StatusCode::BAD_REQUEST, message)
            }
            Error::AxumJsonRejection(error) => {
                error!("Axum Json Rejection Error:{:#?}", error);
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            Error::InvalidLoginDetails => {
                (StatusCode::BAD_REQUEST, "Invalid Login Details".to_string())
            }
            Error::EmailExist(email) => (
                StatusCode::BAD_REQUEST,
                format!("User with email {} already exists!", email),
            ),
            Error::InvalidInvitation => (
                StatusCode::BAD_REQUEST,
                "Invalid or expired invitation token.".to_string(),
            ),
            Error::InvitationEmailMismatch => (
                StatusCode::BAD_REQUEST,
                "This invitation was sent to a different email address.".to_string(),
            ),
            Error::UnrecognizedUser => (
                StatusCode::UNAUTHORIZED,
                "User not found. You need a valid invitation to access this site.".to_string(),
            ),
            Error::EmailNotAuthorized => (
                StatusCode::FORBIDDEN,
                "Access denied. Your email is not authorized. Please contact an administrator for an invitation."
                    .to_string(),
            ),
            Error::PermissionDenied => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this page.".to_string(),
            ),
            Error::CannotChangeOwnRole => (
                StatusCode::BAD_REQUEST,
                "You cannot change your own role".to_string(),
            ),
            Error::CannotDeleteSelf => (
                StatusCode::BAD_REQUEST,
                "You cannot delete your own account".to_string(),
            ),
            Error::GoogleSignInDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Google sign-in is not configured".to_string(),
            ),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            Error::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Error".to_string(),
            ),
            Error::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing authorization token".to_string(),
            ),
            Error::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization token".to_string(),
            ),
            Error::InvalidScheme => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization scheme".to_string(),
            ),
            Error::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired".to_string()),
        };
        (status, message).into_response()
    }
}
