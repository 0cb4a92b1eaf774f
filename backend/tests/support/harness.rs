//! Live server harness and shared world for course behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Dropping the `WorldFixture` stops the
//! server even if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use async_trait::async_trait;
use courses_api::Trace;
use courses_api::domain::ports::{CourseRepository, CourseRepositoryError};
use courses_api::domain::{Course, CourseDraft, CourseId};
use courses_api::inbound::http::courses::{
    create_course, get_course, list_courses, update_course, update_course_without_id,
};
use courses_api::inbound::http::state::HttpState;
use courses_api::inbound::http::validation::json_config;
use courses_api::outbound::memory::InMemoryCourseRepository;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

/// In-memory store that counts every call made through the port.
#[derive(Clone, Default)]
pub(crate) struct RecordingCourseRepository {
    inner: Arc<InMemoryCourseRepository>,
    calls: Arc<AtomicUsize>,
}

impl RecordingCourseRepository {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Store a course directly, bypassing the call counter.
    pub(crate) async fn seed(&self, draft: &CourseDraft) -> Course {
        self.inner.create(draft).await.expect("seed course")
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CourseRepository for RecordingCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        self.record();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Course, CourseRepositoryError> {
        self.record();
        self.inner.find_by_id(id).await
    }

    async fn create(&self, draft: &CourseDraft) -> Result<Course, CourseRepositoryError> {
        self.record();
        self.inner.create(draft).await
    }

    async fn update(
        &self,
        id: CourseId,
        draft: &CourseDraft,
    ) -> Result<Course, CourseRepositoryError> {
        self.record();
        self.inner.update(id, draft).await
    }
}

pub(crate) struct CourseWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) store: RecordingCourseRepository,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_location: Option<String>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<CourseWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

/// Run `operation` on the world's runtime with the server base URL.
///
/// The world stays borrowed while the future runs, so the future must not
/// borrow it mutably.
pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

async fn spawn_course_server(
    store: RecordingCourseRepository,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(HttpState::from_repository(Arc::new(store)));

    let server = HttpServer::new(move || {
        let api = web::scope("/api")
            .service(list_courses)
            .service(get_course)
            .service(create_course)
            .service(update_course)
            .service(update_course_without_id);

        App::new()
            .app_data(http_data.clone())
            .app_data(json_config())
            .wrap(Trace)
            .service(api)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    let store = RecordingCourseRepository::default();

    let (base_url, server) = local
        .block_on(&runtime, spawn_course_server(store.clone()))
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(CourseWorld {
            runtime,
            local,
            base_url,
            server,
            store,
            last_status: None,
            last_body: None,
            last_location: None,
            last_trace_id: None,
        })),
    }
}
