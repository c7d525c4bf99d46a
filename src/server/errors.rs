//! User-facing HTTP errors.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde_derive::Serialize;

use crate::versioning::VersionError;

/// Errors returned to clients of the pinned server.
#[derive(Debug, Display)]
pub enum HTTPError {
    /// The request could not be served, e.g. because it asked for an unknown version.
    #[display(fmt = "Bad request: {}", _0)]
    BadRequest(String),
    /// The requested resource does not exist.
    #[display(fmt = "Not found")]
    NotFound,
    /// Anything the client cannot fix.
    #[display(fmt = "Internal server error")]
    InternalServerError,
}

/// JSON body of an error response.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    /// Human readable message.
    pub error: String,
    /// Stable, machine readable code.
    pub code: &'static str,
}

impl HTTPError {
    /// Machine readable code of the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match *self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServerError => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for HTTPError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            code: self.code(),
        })
    }
}

impl From<VersionError> for HTTPError {
    fn from(error: VersionError) -> Self {
        Self::BadRequest(error.to_string())
    }
}
