//! Course use-case service.
//!
//! Implements the course driving ports on top of a [`CourseRepository`] and
//! translates storage failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::{CourseRepository, CourseRepositoryError, CoursesCommand, CoursesQuery};
use crate::domain::{Course, CourseDraft, CourseId, Error};

fn map_repository_error(err: CourseRepositoryError) -> Error {
    match err {
        CourseRepositoryError::NotFound { id } => {
            Error::not_found(format!("course {id} not found")).with_details(json!({ "id": id }))
        }
        CourseRepositoryError::Connection { message } => {
            warn!(%message, "course repository unavailable");
            Error::service_unavailable(format!("course repository unavailable: {message}"))
        }
        CourseRepositoryError::Query { message } => {
            error!(%message, "course repository query failed");
            Error::internal(format!("course repository error: {message}"))
        }
    }
}

/// Service implementing [`CoursesQuery`] and [`CoursesCommand`].
pub struct CourseService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> CourseService<R> {
    /// Create the service over a shared repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for CourseService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R> CoursesQuery for CourseService<R>
where
    R: CourseRepository + ?Sized,
{
    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> CoursesCommand for CourseService<R>
where
    R: CourseRepository + ?Sized,
{
    async fn create_course(&self, draft: CourseDraft) -> Result<Course, Error> {
        self.repository
            .create(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update_course(&self, id: CourseId, draft: CourseDraft) -> Result<Course, Error> {
        self.repository
            .update(id, &draft)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "course_service_tests.rs"]
mod tests;
