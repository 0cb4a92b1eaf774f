//! Course API handlers.
//!
//! ```text
//! GET  /api/courses
//! GET  /api/courses/{id}
//! POST /api/courses      {"name":"Spring Boot","category":"Programming"}
//! PUT  /api/courses/{id} {"name":"Spring Boot 3","category":"Programming"}
//! ```
//!
//! Each handler validates the path identifier first, then the body, and only
//! then calls the service. Invalid input never reaches the store.

use actix_web::{HttpResponse, get, http::header, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Course, CourseDraft, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    ID_FIELD, map_course_validation_error, missing_identifier_error, parse_path_id,
};

/// Public path of the course collection.
pub const COURSES_PATH: &str = "/api/courses";

/// Request body for create and update.
///
/// Every field is optional so that validation can report all missing fields
/// at once. `_id` is accepted but ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CoursePayload {
    /// Ignored; create assigns a new id and update uses the path.
    #[serde(rename = "_id", default)]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Course name; required and non-blank.
    #[serde(default)]
    #[schema(example = "Spring Boot")]
    pub name: Option<String>,
    /// Course category; required and non-blank.
    #[serde(default)]
    #[schema(example = "Programming")]
    pub category: Option<String>,
}

impl TryFrom<CoursePayload> for CourseDraft {
    type Error = Error;

    fn try_from(value: CoursePayload) -> Result<Self, Self::Error> {
        CourseDraft::try_from_parts(value.name, value.category)
            .map_err(map_course_validation_error)
    }
}

/// Course representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    #[schema(example = 1)]
    pub id: i64,
    /// Course name as submitted.
    #[schema(example = "Spring Boot")]
    pub name: String,
    /// Course category as submitted.
    #[schema(example = "Programming")]
    pub category: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id().get(),
            name: course.name().as_ref().to_owned(),
            category: course.category().as_ref().to_owned(),
        }
    }
}

/// List every course in ascending identifier order.
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Courses", body = [CourseResponse]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Course store unavailable", body = Error)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CourseResponse>>> {
    let courses = state.courses_query.list_courses().await?;
    Ok(web::Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Fetch a single course.
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Positive course identifier")),
    responses(
        (status = 200, description = "Course", body = CourseResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Course not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Course store unavailable", body = Error)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CourseResponse>> {
    let id = parse_path_id(&path.into_inner())?;
    let course = state.courses_query.get_course(id).await?;
    Ok(web::Json(course.into()))
}

/// Create a course; the store assigns its identifier.
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CoursePayload,
    responses(
        (
            status = 201,
            description = "Course created",
            body = CourseResponse,
            headers(("Location" = String, description = "Path of the new course"))
        ),
        (status = 400, description = "Invalid course", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Course store unavailable", body = Error)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CoursePayload>,
) -> ApiResult<HttpResponse> {
    let draft = CourseDraft::try_from(payload.into_inner())?;
    let course = state.courses.create_course(draft).await?;
    let location = format!("{COURSES_PATH}/{}", course.id());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(CourseResponse::from(course)))
}

/// Replace an existing course.
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Positive course identifier")),
    request_body = CoursePayload,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Invalid identifier or course", body = Error),
        (status = 404, description = "Course not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Course store unavailable", body = Error)
    ),
    tags = ["courses"],
    operation_id = "updateCourse"
)]
#[put("/courses/{id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CoursePayload>,
) -> ApiResult<web::Json<CourseResponse>> {
    let id = parse_path_id(&path.into_inner())?;
    let draft = CourseDraft::try_from(payload.into_inner())?;
    let course = state.courses.update_course(id, draft).await?;
    Ok(web::Json(course.into()))
}

/// Reject updates addressed to the collection rather than a course.
#[utoipa::path(
    put,
    path = "/api/courses",
    responses((status = 400, description = "Identifier missing", body = Error)),
    tags = ["courses"],
    operation_id = "updateCourseWithoutId"
)]
#[put("/courses")]
pub async fn update_course_without_id() -> ApiResult<HttpResponse> {
    Err(missing_identifier_error(ID_FIELD))
}
