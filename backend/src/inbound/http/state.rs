//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the course driving ports, so they can be tested without a real store.

use std::sync::Arc;

use crate::domain::CourseService;
use crate::domain::ports::{CourseRepository, CoursesCommand, CoursesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Course mutations.
    pub courses: Arc<dyn CoursesCommand>,
    /// Course reads.
    pub courses_query: Arc<dyn CoursesQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    pub fn new(courses: Arc<dyn CoursesCommand>, courses_query: Arc<dyn CoursesQuery>) -> Self {
        Self {
            courses,
            courses_query,
        }
    }

    /// Wire both ports to one [`CourseService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use courses_api::inbound::http::state::HttpState;
    /// use courses_api::outbound::memory::InMemoryCourseRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryCourseRepository::new()));
    /// # drop(state);
    /// ```
    pub fn from_repository(repository: Arc<dyn CourseRepository>) -> Self {
        let service = Arc::new(CourseService::new(repository));
        Self::new(service.clone(), service)
    }
}
