//! Driven port for course storage.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, CourseId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by course storage adapters.
    pub enum CourseRepositoryError {
        /// No course is stored under the identifier.
        NotFound { id: i64 } => "course {id} not found",
        /// The store could not be reached.
        Connection { message: String } => "course repository connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "course repository query failed: {message}",
    }
}

/// Storage capability over course records.
///
/// Adapters assign identifiers on [`CourseRepository::create`] and must
/// report absent records as [`CourseRepositoryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Every stored course, ordered by ascending identifier.
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    /// Look up one course by identifier.
    async fn find_by_id(&self, id: CourseId) -> Result<Course, CourseRepositoryError>;

    /// Store a new course under a freshly assigned identifier.
    async fn create(&self, draft: &CourseDraft) -> Result<Course, CourseRepositoryError>;

    /// Replace the contents of an existing course.
    async fn update(
        &self,
        id: CourseId,
        draft: &CourseDraft,
    ) -> Result<Course, CourseRepositoryError>;
}
