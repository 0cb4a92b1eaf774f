//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::CourseRepository;
use crate::inbound::http::courses::{
    create_course, get_course, list_courses, update_course, update_course_without_id,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::json_config;

/// Build an app exposing the course routes over `repository`.
///
/// Mirrors the production `/api` scope and JSON error handling without the
/// trace middleware or health probes.
pub fn course_app(
    repository: Arc<dyn CourseRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::from_repository(repository)))
        .app_data(json_config())
        .service(
            web::scope("/api")
                .service(list_courses)
                .service(get_course)
                .service(create_course)
                .service(update_course)
                .service(update_course_without_id),
        )
}
