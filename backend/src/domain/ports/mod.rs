//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod course_repository;
mod courses_command;
mod courses_query;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
#[cfg(test)]
pub use courses_command::MockCoursesCommand;
pub use courses_command::CoursesCommand;
#[cfg(test)]
pub use courses_query::MockCoursesQuery;
pub use courses_query::CoursesQuery;
