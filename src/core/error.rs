//! The single place where an error becomes an HTTP response.
//!
//! Handlers and services never pick status codes. They return domain errors,
//! which are lifted into [`AppError`] and classified here by walking the
//! error's source chain.

use std::collections::BTreeMap;
use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::features::categories::CategoryError;
use crate::features::contacts::ContactError;
use crate::features::recipes::RecipeError;
use crate::shared::errors::{chain, render_chain, ErrorClass};
use crate::shared::types::ErrorResponse;

const VALIDATION_FAILED_MESSAGE: &str = "One or more fields failed validation.";
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected internal server error occurred.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Category(#[from] CategoryError),

    #[error("{0}")]
    Recipe(#[from] RecipeError),

    #[error("{0}")]
    Contact(#[from] ContactError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("route not found")]
    RouteNotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            AppError::Validation(errors) => {
                tracing::debug!("Request rejected by input validation: {}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details(
                        VALIDATION_FAILED_MESSAGE,
                        describe_validation_errors(errors),
                    ),
                )
            }
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message.clone()))
            }
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, ErrorResponse::new(self.to_string())),
            _ => match classify(self) {
                Some((class, cause)) => {
                    let status = status_for(class);
                    tracing::debug!("Request failed with {}: {}", status, render_chain(self));
                    (status, ErrorResponse::new(cause.to_string()))
                }
                None => {
                    tracing::error!("Unhandled error: {}", render_chain(self));
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
                    )
                }
            },
        }
    }
}

/// Outermost error in the chain that belongs to a domain vocabulary and
/// carries a class, together with that class.
fn classify<'a>(
    error: &'a (dyn StdError + 'static),
) -> Option<(ErrorClass, &'a (dyn StdError + 'static))> {
    chain(error).find_map(|cause| domain_class(cause).map(|class| (class, cause)))
}

fn domain_class(error: &(dyn StdError + 'static)) -> Option<ErrorClass> {
    if let Some(e) = error.downcast_ref::<CategoryError>() {
        return e.class();
    }
    if let Some(e) = error.downcast_ref::<RecipeError>() {
        return e.class();
    }
    if let Some(e) = error.downcast_ref::<ContactError>() {
        return e.class();
    }
    None
}

fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::Conflict => StatusCode::CONFLICT,
        ErrorClass::InvalidInput => StatusCode::BAD_REQUEST,
    }
}

/// One message per failed field, keyed by the field's wire (camelCase) name.
fn describe_validation_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let name = wire_field_name(&field);
            field_errors
                .first()
                .map(|error| (name.clone(), describe_rule(&name, error)))
        })
        .collect()
}

fn describe_rule(field: &str, error: &ValidationError) -> String {
    match &*error.code {
        "required" => format!("The field '{}' is required.", field),
        "email" => format!("The field '{}' must be a valid email address.", field),
        "length" => describe_length(field, error),
        "range" => describe_range(field, error),
        rule => format!(
            "The field '{}' is invalid (failed the '{}' rule).",
            field, rule
        ),
    }
}

fn describe_length(field: &str, error: &ValidationError) -> String {
    let min = error.params.get("min").and_then(Value::as_u64);
    let max = error.params.get("max").and_then(Value::as_u64);
    let actual = error
        .params
        .get("value")
        .and_then(Value::as_str)
        .map(|v| v.chars().count() as u64);

    match (min, max, actual) {
        (Some(min), _, Some(len)) if len < min => too_short(field, min),
        (_, Some(max), _) => format!("The field '{}' must not exceed {} characters.", field, max),
        (Some(min), None, _) => too_short(field, min),
        _ => format!("The field '{}' has an invalid length.", field),
    }
}

fn too_short(field: &str, min: u64) -> String {
    format!("The field '{}' must be at least {} characters long.", field, min)
}

fn describe_range(field: &str, error: &ValidationError) -> String {
    let param = |key: &str| error.params.get(key).map(Value::to_string);

    if let Some(bound) = param("exclusive_min") {
        format!("The field '{}' must be greater than {}.", field, bound)
    } else if let Some(bound) = param("min") {
        format!("The field '{}' must be at least {}.", field, bound)
    } else if let Some(bound) = param("exclusive_max") {
        format!("The field '{}' must be less than {}.", field, bound)
    } else if let Some(bound) = param("max") {
        format!("The field '{}' must be at most {}.", field, bound)
    } else {
        format!("The field '{}' is out of range.", field)
    }
}

/// `category_id` -> `categoryId`
fn wire_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    name
}

pub type Result<T> = std::result::Result<T, AppError>;
