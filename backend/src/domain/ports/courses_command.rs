//! Driving port for course mutations.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, CourseId, Error};

/// Write-side course use cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesCommand: Send + Sync {
    /// Store a new course and return it with its assigned identifier.
    async fn create_course(&self, draft: CourseDraft) -> Result<Course, Error>;

    /// Replace an existing course; absent identifiers yield not-found.
    async fn update_course(&self, id: CourseId, draft: CourseDraft) -> Result<Course, Error>;
}
