//! Extractors that validate request input and reject with itemized
//! `{field, message}` errors.
//!
//! - [`ValidatedJson`] deserializes the body, then runs its
//!   [`validator::Validate`] rules.
//! - [`ValidatedQuery`] does the same for the query string.
//! - [`ValidatedPath`] reports malformed path parameters (e.g. a non-UUID id)
//!   under the parameter's name.

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, RawPathParams, Request};
use axum::http::request::Parts;
use axum::Json;
use pathway_core::validation::{flatten_errors, to_camel_case, FieldError};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![json_rejection_error(&rejection)]))?;
        value
            .validate()
            .map_err(|errors| AppError::Validation(flatten_errors(&errors)))?;
        Ok(Self(value))
    }
}

/// Query string that has been deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                AppError::Validation(vec![FieldError::new("query", rejection.body_text())])
            })?;
        value
            .validate()
            .map_err(|errors| AppError::Validation(flatten_errors(&errors)))?;
        Ok(Self(value))
    }
}

/// Path parameters that parsed into `T`.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                let single = single_param_name(parts, state).await;
                Err(AppError::Validation(vec![path_rejection_error(
                    &rejection,
                    single.as_deref(),
                )]))
            }
        }
    }
}

/// The route's parameter name when it captures exactly one segment.
async fn single_param_name<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<String> {
    let params = RawPathParams::from_request_parts(parts, state).await.ok()?;
    let mut iter = params.iter();
    match (iter.next(), iter.next()) {
        (Some((key, _)), None) => Some(to_camel_case(key)),
        _ => None,
    }
}

fn path_rejection_error(rejection: &PathRejection, single: Option<&str>) -> FieldError {
    let PathRejection::FailedToDeserializePathParams(err) = rejection else {
        return FieldError::new("path", rejection.body_text());
    };
    let field = single.unwrap_or("path");
    match err.kind() {
        ErrorKind::ParseErrorAtKey {
            key,
            value,
            expected_type,
        } => FieldError::new(to_camel_case(key), parse_message(value, expected_type)),
        ErrorKind::ParseError {
            value,
            expected_type,
        } => FieldError::new(field, parse_message(value, expected_type)),
        ErrorKind::DeserializeError { key, message, .. } => {
            FieldError::new(to_camel_case(key), deserialize_message(message))
        }
        ErrorKind::Message(message) => FieldError::new(field, deserialize_message(message)),
        _ => FieldError::new(field, err.body_text()),
    }
}

fn parse_message(value: &str, expected_type: &str) -> String {
    if expected_type.ends_with("Uuid") {
        "Must be a valid UUID".to_string()
    } else {
        format!("Cannot parse '{value}' as {expected_type}")
    }
}

/// Uuid reports its own parse failure as a free-form message.
fn deserialize_message(message: &str) -> String {
    if message.contains("UUID") {
        "Must be a valid UUID".to_string()
    } else {
        message.to_string()
    }
}

fn json_rejection_error(rejection: &JsonRejection) -> FieldError {
    match rejection {
        JsonRejection::JsonDataError(err) => field_error_from_serde(&err.body_text()),
        other => FieldError::new("body", other.body_text()),
    }
}

/// Turn a body deserialization message into a field error.
///
/// The message reads `<prefix>: [<field path>: ]<reason>`; a missing field is
/// reported under its own name.
fn field_error_from_serde(detail: &str) -> FieldError {
    let rest = detail
        .split_once("target type: ")
        .map_or(detail, |(_, rest)| rest);

    let (path, reason) = match rest.split_once(": ") {
        Some((path, reason)) if is_field_path(path) => (Some(path), reason),
        _ => (None, rest),
    };

    if let Some(missing) = missing_field(reason) {
        let field = match path {
            Some(path) => format!("{path}.{missing}"),
            None => missing.to_string(),
        };
        return FieldError::new(field, "Required");
    }

    FieldError::new(path.unwrap_or("body"), strip_position(reason))
}

fn is_field_path(candidate: &str) -> bool {
    candidate.starts_with(|c: char| c.is_ascii_alphabetic())
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}

fn missing_field(reason: &str) -> Option<&str> {
    let after = reason.strip_prefix("missing field `")?;
    after.split_once('`').map(|(name, _)| name)
}

/// Drop serde_json's trailing ` at line N column M`.
fn strip_position(reason: &str) -> &str {
    reason
        .rsplit_once(" at line ")
        .map_or(reason, |(head, _)| head)
}
