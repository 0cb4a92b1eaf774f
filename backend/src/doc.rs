//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every course and health endpoint together with the
//! request, response and error schemas. Swagger UI serves it in debug builds
//! and the `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::courses::{CoursePayload, CourseResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courses API",
        description = "CRUD interface over the course catalogue plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::update_course_without_id,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CoursePayload, CourseResponse, Error, ErrorCode)),
    tags(
        (name = "courses", description = "Course catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
