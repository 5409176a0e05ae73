use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::orgs::{find_affected_units, find_default_muster, update_default_muster};
use crate::domain::units::{find_unit_muster, update_unit_muster};

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        let body = Json(json!({
            "errors": [{ "message": error_message }],
        }));
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        log::trace!("rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

fn org_not_found() -> ApiError {
    ApiError::NotFound("Unable to find organization.".to_string())
}

fn unit_not_found() -> ApiError {
    ApiError::NotFound("Unable to find unit.".to_string())
}

fn unknown() -> ApiError {
    ApiError::InternalServerError(INTERNAL_SERVER_ERROR_MESSAGE.to_string())
}

impl From<find_default_muster::Error> for ApiError {
    fn from(err: find_default_muster::Error) -> Self {
        match err {
            find_default_muster::Error::NotFound => org_not_found(),
            find_default_muster::Error::Unknown => unknown(),
        }
    }
}

impl From<update_default_muster::Error> for ApiError {
    fn from(err: update_default_muster::Error) -> Self {
        match err {
            update_default_muster::Error::BadRequest(message) => ApiError::BadRequest(message),
            update_default_muster::Error::NotFound => org_not_found(),
            update_default_muster::Error::Unknown => unknown(),
        }
    }
}

impl From<find_affected_units::Error> for ApiError {
    fn from(err: find_affected_units::Error) -> Self {
        match err {
            find_affected_units::Error::NotFound => org_not_found(),
            find_affected_units::Error::Unknown => unknown(),
        }
    }
}

impl From<find_unit_muster::Error> for ApiError {
    fn from(err: find_unit_muster::Error) -> Self {
        match err {
            find_unit_muster::Error::NotFound => unit_not_found(),
            find_unit_muster::Error::Unknown => unknown(),
        }
    }
}

impl From<update_unit_muster::Error> for ApiError {
    fn from(err: update_unit_muster::Error) -> Self {
        match err {
            update_unit_muster::Error::BadRequest(message) => ApiError::BadRequest(message),
            update_unit_muster::Error::NotFound => unit_not_found(),
            update_unit_muster::Error::Unknown => unknown(),
        }
    }
}
