//! Driving port for reading courses.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Error};

/// Read-side course use cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesQuery: Send + Sync {
    /// Every course, ordered by ascending identifier.
    async fn list_courses(&self) -> Result<Vec<Course>, Error>;

    /// Fetch one course, failing with a not-found error when absent.
    async fn get_course(&self, id: CourseId) -> Result<Course, Error>;
}
