//! Argument validation for loosely-typed caller input.
//!
//! Resource operations accept their arguments as [`serde_json::Value`] so that
//! absent (`null`) and mistyped input can be represented and rejected before any
//! request is built. Every check fails with [`Error::Validation`] naming the
//! offending parameter.

use chrono::Utc;
use serde_json::{Number, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ClosedSet;

/// JSON type name of a value, as used in validation messages.
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn reject(name: &str, reason: String) -> Error {
    debug!(parameter = name, %reason, "rejecting argument");
    Error::Validation(reason)
}

fn missing(name: &str) -> Error {
    reject(name, format!("`{name}` is required"))
}

fn mistyped(name: &str, expected: &str, value: &Value) -> Error {
    reject(
        name,
        format!(
            "`{name}` must be of type {expected}, got {}",
            type_name(value)
        ),
    )
}

/// Require a non-empty string.
///
/// # Errors
///
/// Fails when the value is `null`, blank, or not a string.
pub fn require_str(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Err(missing(name)),
        Value::String(text) if text.trim().is_empty() => {
            Err(reject(name, format!("`{name}` must not be empty")))
        }
        Value::String(text) => Ok(text.clone()),
        other => Err(mistyped(name, "string", other)),
    }
}

/// Require a non-empty string usable as a single URL path segment.
///
/// `.` and `..` are rejected: URL normalization would drop them and send the
/// request to a different endpoint.
///
/// # Errors
///
/// Fails like [`require_str`], and when the value is a dot segment.
pub fn require_segment(name: &str, value: &Value) -> Result<String> {
    let text = require_str(name, value)?;
    if matches!(text.as_str(), "." | "..") {
        return Err(reject(
            name,
            format!("`{name}` must not be a relative path segment (got `{text}`)"),
        ));
    }

    Ok(text)
}

/// Require a JSON number.
///
/// # Errors
///
/// Fails when the value is `null` or not a number.
pub fn require_number(name: &str, value: &Value) -> Result<Number> {
    match value {
        Value::Null => Err(missing(name)),
        Value::Number(number) => Ok(number.clone()),
        other => Err(mistyped(name, "number", other)),
    }
}

/// Require a number greater than zero.
///
/// # Errors
///
/// Fails like [`require_number`], and when the number is zero or negative.
pub fn require_positive_number(name: &str, value: &Value) -> Result<Number> {
    let number = require_number(name, value)?;
    match number.as_f64() {
        Some(n) if n > 0.0 => Ok(number),
        _ => Err(reject(
            name,
            format!("`{name}` must be a positive number, got {number}"),
        )),
    }
}

/// Require a member of a closed set.
///
/// # Errors
///
/// Fails when the value is missing, not a string, or not in the set; the
/// message lists every valid member.
pub fn require_choice<T: ClosedSet>(name: &str, value: &Value) -> Result<T> {
    let text = require_str(name, value)?;
    T::lookup(&text).ok_or_else(|| {
        reject(
            name,
            format!("`{name}` must be one of {} (got `{text}`)", T::expected()),
        )
    })
}

/// Accept an optional Unix timestamp (seconds) that is not later than now.
///
/// `null` means the parameter was omitted.
///
/// # Errors
///
/// Fails when the value is not an integer number or lies in the future.
pub fn optional_past_timestamp(name: &str, value: &Value) -> Result<Option<i64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            let timestamp = number.as_i64().ok_or_else(|| {
                reject(
                    name,
                    format!("`{name}` must be an integer Unix timestamp, got {number}"),
                )
            })?;

            let now = Utc::now().timestamp();
            if timestamp > now {
                return Err(reject(
                    name,
                    format!("`{name}` must not exceed the current time ({now}), got {timestamp}"),
                ));
            }

            Ok(Some(timestamp))
        }
        other => Err(mistyped(name, "number", other)),
    }
}
