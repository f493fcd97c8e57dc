//! Scalar read/write conventions of the S3 SOAP schema.
//!
//! Strings, integers and booleans follow the omit-when-zero convention;
//! timestamps are RFC 3339; binary payloads are base64 text.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use soapcore::CallError;
use soapcore::xmlutil::{child_text, push_text_child};
use xmltree::Element;

pub(crate) fn push_string(element: &mut Element, name: &str, value: &str) {
    if !value.is_empty() {
        push_text_child(element, name, value);
    }
}

pub(crate) fn push_i32(element: &mut Element, name: &str, value: i32) {
    if value != 0 {
        push_text_child(element, name, &value.to_string());
    }
}

pub(crate) fn push_i64(element: &mut Element, name: &str, value: i64) {
    if value != 0 {
        push_text_child(element, name, &value.to_string());
    }
}

pub(crate) fn push_bool(element: &mut Element, name: &str, value: bool) {
    if value {
        push_text_child(element, name, "true");
    }
}

pub(crate) fn push_time(element: &mut Element, name: &str, value: Option<&DateTime<Utc>>) {
    if let Some(time) = value {
        push_text_child(element, name, &time.to_rfc3339());
    }
}

pub(crate) fn push_bytes(element: &mut Element, name: &str, value: &[u8]) {
    if !value.is_empty() {
        push_text_child(element, name, &STANDARD.encode(value));
    }
}

pub(crate) fn read_string(element: &Element, name: &str) -> String {
    child_text(element, name).unwrap_or_default()
}

pub(crate) fn read_opt_string(element: &Element, name: &str) -> Option<String> {
    child_text(element, name)
}

pub(crate) fn read_time(element: &Element, name: &str) -> Result<Option<DateTime<Utc>>, CallError> {
    match child_text(element, name) {
        Some(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| {
                CallError::Serialization(format!("invalid <{name}> timestamp '{text}': {e}"))
            }),
        None => Ok(None),
    }
}

pub(crate) fn read_bytes(element: &Element, name: &str) -> Result<Option<Vec<u8>>, CallError> {
    match child_text(element, name) {
        Some(text) => STANDARD
            .decode(text.as_bytes())
            .map(Some)
            .map_err(|e| CallError::Serialization(format!("invalid <{name}> base64 data: {e}"))),
        None => Ok(None),
    }
}
