//! Course data model and its structural validation rules.
//!
//! Identifiers are positive integers assigned by the store. Names and
//! categories must carry at least one non-whitespace character and are kept
//! exactly as submitted.

use std::fmt;

use thiserror::Error;

/// Reasons a course identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdValidationError {
    /// No identifier was supplied.
    #[error("course id is required")]
    Missing,
    /// The identifier is not an integer.
    #[error("course id must be an integer, got `{value}`")]
    Malformed {
        /// Raw text as received.
        value: String,
    },
    /// The identifier is zero or negative.
    #[error("course id must be positive, got {value}")]
    NotPositive {
        /// Rejected integer value.
        value: i64,
    },
}

impl IdValidationError {
    /// True when no identifier was supplied at all.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Store-assigned course identifier.
///
/// # Examples
/// ```
/// use courses_api::domain::CourseId;
///
/// assert_eq!(CourseId::new(3).map(|id| id.get()), Ok(3));
/// assert!(CourseId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(i64);

impl CourseId {
    /// Validate and wrap a raw identifier.
    ///
    /// # Errors
    /// Returns [`IdValidationError::NotPositive`] for zero or negative values.
    pub fn new(value: i64) -> Result<Self, IdValidationError> {
        if value <= 0 {
            return Err(IdValidationError::NotPositive { value });
        }
        Ok(Self(value))
    }

    /// Underlying integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for CourseId {
    type Error = IdValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parse a raw identifier as it arrives from a transport.
///
/// `None` and blank input report [`IdValidationError::Missing`]; anything
/// else must be a positive base-10 integer.
///
/// # Examples
/// ```
/// use courses_api::domain::{IdValidationError, parse_course_id};
///
/// assert_eq!(parse_course_id(Some("12")).map(|id| id.get()), Ok(12));
/// assert_eq!(parse_course_id(None), Err(IdValidationError::Missing));
/// assert!(matches!(
///     parse_course_id(Some("-1")),
///     Err(IdValidationError::NotPositive { value: -1 })
/// ));
/// ```
pub fn parse_course_id(raw: Option<&str>) -> Result<CourseId, IdValidationError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(IdValidationError::Missing),
    };
    let value = raw
        .parse::<i64>()
        .map_err(|_| IdValidationError::Malformed {
            value: raw.to_owned(),
        })?;
    CourseId::new(value)
}

/// Course payload fields subject to validation, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CourseField {
    /// The `name` field.
    Name,
    /// The `category` field.
    Category,
}

impl CourseField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The field was absent from the payload.
    Missing,
    /// The field was present but empty or whitespace only.
    Blank,
}

/// A single field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    /// Offending field.
    pub field: CourseField,
    /// Why the field was rejected.
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{} is required", self.field),
            ViolationKind::Blank => write!(f, "{} must not be blank", self.field),
        }
    }
}

/// Every field violation found in a course payload.
///
/// ## Invariants
/// - `violations` is non-empty and ordered name before category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid course: {}", describe(.violations))]
pub struct CourseValidationError {
    violations: Vec<FieldViolation>,
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl CourseValidationError {
    /// Violations in field declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

fn check_text(field: CourseField, value: Option<String>) -> Result<String, FieldViolation> {
    match value {
        None => Err(FieldViolation {
            field,
            kind: ViolationKind::Missing,
        }),
        Some(text) if text.trim().is_empty() => Err(FieldViolation {
            field,
            kind: ViolationKind::Blank,
        }),
        Some(text) => Ok(text),
    }
}

/// Non-blank course name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName(String);

impl CourseName {
    /// Validate a course name, keeping it exactly as given.
    ///
    /// # Errors
    /// Returns [`CourseValidationError`] when the name is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, CourseValidationError> {
        check_text(CourseField::Name, Some(value.into()))
            .map(Self)
            .map_err(CourseValidationError::single)
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Non-blank course category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCategory(String);

impl CourseCategory {
    /// Validate a course category, keeping it exactly as given.
    ///
    /// # Errors
    /// Returns [`CourseValidationError`] when the category is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, CourseValidationError> {
        check_text(CourseField::Category, Some(value.into()))
            .map(Self)
            .map_err(CourseValidationError::single)
    }
}

impl AsRef<str> for CourseCategory {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated course contents without an identifier.
///
/// Used for both creation and full-replace updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    name: CourseName,
    category: CourseCategory,
}

impl CourseDraft {
    /// Pair an already validated name and category.
    pub fn new(name: CourseName, category: CourseCategory) -> Self {
        Self { name, category }
    }

    /// Validate optional raw fields, reporting every offending field.
    ///
    /// # Examples
    /// ```
    /// use courses_api::domain::{CourseDraft, CourseField};
    ///
    /// let err = CourseDraft::try_from_parts(None, Some(" ".into())).unwrap_err();
    /// let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
    /// assert_eq!(fields, [CourseField::Name, CourseField::Category]);
    /// ```
    pub fn try_from_parts(
        name: Option<String>,
        category: Option<String>,
    ) -> Result<Self, CourseValidationError> {
        let name = check_text(CourseField::Name, name);
        let category = check_text(CourseField::Category, category);
        match (name, category) {
            (Ok(name), Ok(category)) => Ok(Self {
                name: CourseName(name),
                category: CourseCategory(category),
            }),
            (name, category) => Err(CourseValidationError {
                violations: [name.err(), category.err()].into_iter().flatten().collect(),
            }),
        }
    }

    /// Proposed course name.
    pub fn name(&self) -> &CourseName {
        &self.name
    }

    /// Proposed course category.
    pub fn category(&self) -> &CourseCategory {
        &self.category
    }
}

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    name: CourseName,
    category: CourseCategory,
}

impl Course {
    /// Attach a store-assigned identifier to a draft.
    pub fn new(id: CourseId, draft: CourseDraft) -> Self {
        let CourseDraft { name, category } = draft;
        Self { id, name, category }
    }

    /// Identifier assigned by the store.
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Course name.
    pub fn name(&self) -> &CourseName {
        &self.name
    }

    /// Course category.
    pub fn category(&self) -> &CourseCategory {
        &self.category
    }
}
