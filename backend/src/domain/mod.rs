//! Domain primitives, services and ports.
//!
//! Purpose: define the course aggregate and the rules it must satisfy before
//! reaching storage. Types here are transport agnostic; inbound adapters map
//! them onto HTTP and outbound adapters onto a concrete store.
//!
//! Public surface:
//! - Course, CourseDraft, CourseId: the course aggregate and its parts.
//! - CourseService: use-case service behind the driving ports.
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier.

pub mod course;
mod course_service;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::course::{
    Course, CourseCategory, CourseDraft, CourseField, CourseId, CourseName,
    CourseValidationError, FieldViolation, IdValidationError, ViolationKind, parse_course_id,
};
pub use self::course_service::CourseService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;

/// Result alias used by domain services and ports.
///
/// # Examples
/// ```
/// use courses_api::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("course 7 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
