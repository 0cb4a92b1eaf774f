//! In-process course store.
//!
//! Records live in a `BTreeMap` keyed by identifier so listings come back in
//! ascending id order. Identifiers are handed out from a monotonic sequence
//! starting at 1 and are never reused.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseDraft, CourseId};

#[derive(Debug)]
struct Inner {
    courses: BTreeMap<CourseId, Course>,
    next_id: i64,
}

/// Course repository backed by process memory.
#[derive(Debug)]
pub struct InMemoryCourseRepository {
    inner: RwLock<Inner>,
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCourseRepository {
    /// Create an empty store whose first identifier is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                courses: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, CourseRepositoryError> {
        self.inner
            .read()
            .map_err(|_| CourseRepositoryError::query("course store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, CourseRepositoryError> {
        self.inner
            .write()
            .map_err(|_| CourseRepositoryError::query("course store lock poisoned"))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.read()?.courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Course, CourseRepositoryError> {
        self.read()?
            .courses
            .get(&id)
            .cloned()
            .ok_or_else(|| CourseRepositoryError::not_found(id.get()))
    }

    async fn create(&self, draft: &CourseDraft) -> Result<Course, CourseRepositoryError> {
        let mut inner = self.write()?;
        let id = CourseId::new(inner.next_id)
            .map_err(|err| CourseRepositoryError::query(err.to_string()))?;
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| CourseRepositoryError::query("course id sequence exhausted"))?;

        let course = Course::new(id, draft.clone());
        inner.courses.insert(id, course.clone());
        debug!(course_id = %id, "course created");
        Ok(course)
    }

    async fn update(
        &self,
        id: CourseId,
        draft: &CourseDraft,
    ) -> Result<Course, CourseRepositoryError> {
        let mut inner = self.write()?;
        let slot = inner
            .courses
            .get_mut(&id)
            .ok_or_else(|| CourseRepositoryError::not_found(id.get()))?;
        *slot = Course::new(id, draft.clone());
        debug!(course_id = %id, "course updated");
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    use crate::domain::{CourseCategory, CourseName};
    use crate::inbound::http::test_utils::course_app;

    fn draft(name: &str, category: &str) -> CourseDraft {
        CourseDraft::new(
            CourseName::new(name).expect("valid name"),
            CourseCategory::new(category).expect("valid category"),
        )
    }

    #[fixture]
    fn repo() -> InMemoryCourseRepository {
        InMemoryCourseRepository::new()
    }

    /// Store whose lock was poisoned by a writer panicking mid-update.
    #[fixture]
    fn poisoned() -> Arc<InMemoryCourseRepository> {
        let repo = Arc::new(InMemoryCourseRepository::new());
        let writer = Arc::clone(&repo);
        let outcome = thread::spawn(move || {
            let _guard = writer.inner.write().expect("lock is healthy");
            panic!("writer failed while holding the course store lock");
        })
        .join();
        assert!(outcome.is_err());
        assert!(repo.inner.is_poisoned());
        repo
    }

    #[rstest]
    #[tokio::test]
    async fn starts_empty(repo: InMemoryCourseRepository) {
        assert!(repo.find_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_sequential_ids(repo: InMemoryCourseRepository) {
        let first = repo.create(&draft("Rust", "Systems")).await.expect("create");
        let second = repo.create(&draft("Go", "Systems")).await.expect("create");
        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_orders_by_id(repo: InMemoryCourseRepository) {
        for name in ["c", "a", "b"] {
            repo.create(&draft(name, "x")).await.expect("create");
        }
        let ids: Vec<i64> = repo
            .find_all()
            .await
            .expect("list")
            .iter()
            .map(|course| course.id().get())
            .collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn created_course_round_trips(repo: InMemoryCourseRepository) {
        let created = repo
            .create(&draft(" Spring Boot", "Programming "))
            .await
            .expect("create");
        let fetched = repo.find_by_id(created.id()).await.expect("fetch");
        assert_eq!(fetched, created);
        assert_eq!(fetched.name().as_ref(), " Spring Boot");
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_reports_absent_records(repo: InMemoryCourseRepository) {
        let id = CourseId::new(4).expect("valid id");
        assert_eq!(
            repo.find_by_id(id).await,
            Err(CourseRepositoryError::not_found(4))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_every_field(repo: InMemoryCourseRepository) {
        let created = repo.create(&draft("Rust", "Systems")).await.expect("create");
        let updated = repo
            .update(created.id(), &draft("Rust 2024", "Languages"))
            .await
            .expect("update");
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name().as_ref(), "Rust 2024");
        assert_eq!(updated.category().as_ref(), "Languages");
        assert_eq!(
            repo.find_by_id(created.id()).await.expect("fetch"),
            updated
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_absent_record_is_not_found(repo: InMemoryCourseRepository) {
        let id = CourseId::new(1).expect("valid id");
        let result = repo.update(id, &draft("Rust", "Systems")).await;
        assert_eq!(result, Err(CourseRepositoryError::not_found(1)));
        assert!(repo.find_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn poisoned_lock_surfaces_as_query_error(poisoned: Arc<InMemoryCourseRepository>) {
        let id = CourseId::new(1).expect("valid id");
        let course = draft("Rust", "Systems");

        assert!(matches!(
            poisoned.find_all().await,
            Err(CourseRepositoryError::Query { .. })
        ));
        assert!(matches!(
            poisoned.find_by_id(id).await,
            Err(CourseRepositoryError::Query { .. })
        ));
        assert!(matches!(
            poisoned.create(&course).await,
            Err(CourseRepositoryError::Query { .. })
        ));
        assert!(matches!(
            poisoned.update(id, &course).await,
            Err(CourseRepositoryError::Query { .. })
        ));
    }

    #[rstest]
    #[actix_web::test]
    async fn poisoned_store_answers_with_redacted_500(poisoned: Arc<InMemoryCourseRepository>) {
        let app = actix_test::init_service(course_app(poisoned)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/courses").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({ "code": "internal_error", "message": "Internal server error" })
        );
    }
}
