//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every validation failure is a 400 with the message `Bad Request`; the
//! offending field and a machine-readable code travel in `details`.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Error;
use crate::inbound::http::error::BAD_REQUEST_MESSAGE;

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidInteger,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidInteger => "invalid_integer",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(BAD_REQUEST_MESSAGE).with_details(json!({
        "field": field.as_str(),
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_integer_error(field: FieldName, value: impl Into<String>) -> Error {
    Error::invalid_request(BAD_REQUEST_MESSAGE).with_details(json!({
        "field": field.as_str(),
        "value": value.into(),
        "code": ErrorCode::InvalidInteger.as_str(),
    }))
}

/// Unwrap a required field or report it missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Integer accepted either as a JSON number or as a string of digits.
///
/// Browser clients often send ids read from object keys, which are strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IntegerInput {
    /// A JSON number.
    Number(i64),
    /// A decimal string such as `"3"`.
    Text(String),
}

/// Convert an [`IntegerInput`] to an `i32`, rejecting non-numeric text and
/// values outside the `i32` range.
pub(crate) fn parse_integer(input: IntegerInput, field: FieldName) -> Result<i32, Error> {
    match input {
        IntegerInput::Number(value) => {
            i32::try_from(value).map_err(|_| invalid_integer_error(field, value.to_string()))
        }
        IntegerInput::Text(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|_| invalid_integer_error(field, text)),
    }
}

/// Parse a raw path or query segment as an `i32`.
pub(crate) fn parse_integer_text(raw: &str, field: FieldName) -> Result<i32, Error> {
    parse_integer(IntegerInput::Text(raw.to_owned()), field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    const FIELD: FieldName = FieldName::new("category");

    #[rstest]
    #[case(json!(3), 3)]
    #[case(json!("3"), 3)]
    #[case(json!(" 12 "), 12)]
    #[case(json!(-4), -4)]
    fn integers_and_numeric_strings_are_accepted(#[case] raw: Value, #[case] expected: i32) {
        let input: IntegerInput = serde_json::from_value(raw).expect("deserialises");
        assert_eq!(parse_integer(input, FIELD).expect("valid integer"), expected);
    }

    #[rstest]
    #[case(IntegerInput::Text("abc".to_owned()), "abc")]
    #[case(IntegerInput::Text("1.5".to_owned()), "1.5")]
    #[case(IntegerInput::Number(i64::from(i32::MAX) + 1), "2147483648")]
    fn invalid_integers_are_bad_requests(#[case] input: IntegerInput, #[case] value: &str) {
        let err = parse_integer(input, FIELD).expect_err("invalid");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Bad Request");
        let details = err.details().expect("details");
        assert_eq!(details["field"], "category");
        assert_eq!(details["value"], value);
        assert_eq!(details["code"], "invalid_integer");
    }

    #[rstest]
    fn floats_do_not_deserialise() {
        assert!(serde_json::from_value::<IntegerInput>(json!(1.5)).is_err());
    }

    #[rstest]
    fn missing_fields_name_the_field() {
        let err = require::<IntegerInput>(None, FieldName::new("answer")).expect_err("missing");
        assert_eq!(err.message(), "Bad Request");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "answer", "code": "missing_field"}))
        );
    }
}
