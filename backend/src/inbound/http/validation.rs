//! Request validation helpers for the HTTP adapter.
//!
//! Domain validation errors are turned into `invalid_request` errors whose
//! `details` tell clients which input was rejected and why.

use actix_web::web;
use actix_web::error::JsonPayloadError;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{
    CourseId, CourseValidationError, Error, IdValidationError, ViolationKind, parse_course_id,
};

/// Detail codes attached to `invalid_request` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
    InvalidCourse,
    InvalidIdentifier,
    MissingIdentifier,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::BlankField => "blank_field",
            Self::InvalidCourse => "invalid_course",
            Self::InvalidIdentifier => "invalid_identifier",
            Self::MissingIdentifier => "missing_identifier",
            Self::MalformedBody => "malformed_body",
        }
    }
}

impl From<ViolationKind> for ErrorCode {
    fn from(kind: ViolationKind) -> Self {
        match kind {
            ViolationKind::Missing => Self::MissingField,
            ViolationKind::Blank => Self::BlankField,
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

pub(crate) const ID_FIELD: FieldName = FieldName::new("id");

pub(crate) fn missing_identifier_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} is required")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingIdentifier.as_str(),
    }))
}

pub(crate) fn invalid_identifier_error(field: FieldName, value: impl Into<Value>) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a positive integer")).with_details(json!({
        "field": field,
        "code": ErrorCode::InvalidIdentifier.as_str(),
        "value": value.into(),
    }))
}

/// Map an identifier rejection onto the HTTP error envelope.
pub(crate) fn map_id_error(err: IdValidationError) -> Error {
    match err {
        IdValidationError::Missing => missing_identifier_error(ID_FIELD),
        IdValidationError::Malformed { value } => invalid_identifier_error(ID_FIELD, value),
        IdValidationError::NotPositive { value } => {
            invalid_identifier_error(ID_FIELD, value.to_string())
        }
    }
}

/// Parse a path segment into a course identifier.
pub(crate) fn parse_path_id(raw: &str) -> Result<CourseId, Error> {
    parse_course_id(Some(raw)).map_err(map_id_error)
}

/// List every rejected course field in the error details.
pub(crate) fn map_course_validation_error(err: CourseValidationError) -> Error {
    let fields: Vec<Value> = err
        .violations()
        .iter()
        .map(|violation| {
            json!({
                "field": violation.field.as_str(),
                "code": ErrorCode::from(violation.kind).as_str(),
            })
        })
        .collect();
    Error::invalid_request(err.to_string()).with_details(json!({
        "code": ErrorCode::InvalidCourse.as_str(),
        "fields": fields,
    }))
}

pub(crate) fn malformed_body_error(err: &JsonPayloadError) -> Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request(format!("malformed request body: {err}")).with_details(json!({
        "code": ErrorCode::MalformedBody.as_str(),
    }))
}

/// JSON extractor configuration reporting decode failures as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| actix_web::Error::from(malformed_body_error(&err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseDraft, ErrorCode as DomainErrorCode};
    use rstest::rstest;

    #[rstest]
    #[case("-1", json!("-1"))]
    #[case("0", json!("0"))]
    #[case("abc", json!("abc"))]
    fn invalid_path_ids_report_raw_value(#[case] raw: &str, #[case] value: Value) {
        let err = parse_path_id(raw).expect_err("invalid id");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "id", "code": "invalid_identifier", "value": value }))
        );
    }

    #[rstest]
    fn missing_id_keeps_its_own_code() {
        let err = map_id_error(IdValidationError::Missing);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "id", "code": "missing_identifier" }))
        );
    }

    #[rstest]
    fn valid_path_id_parses() {
        assert_eq!(parse_path_id("17").map(CourseId::get), Ok(17));
    }

    #[rstest]
    fn course_violations_are_listed_in_order() {
        let err = CourseDraft::try_from_parts(Some(String::new()), None)
            .expect_err("invalid course");
        let mapped = map_course_validation_error(err);
        assert_eq!(
            mapped.details(),
            Some(&json!({
                "code": "invalid_course",
                "fields": [
                    { "field": "name", "code": "blank_field" },
                    { "field": "category", "code": "missing_field" }
                ]
            }))
        );
    }

    #[rstest]
    fn malformed_body_sets_detail_code() {
        let err = malformed_body_error(&JsonPayloadError::ContentType);
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.details(), Some(&json!({ "code": "malformed_body" })));
    }
}
