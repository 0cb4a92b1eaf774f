//! Courses API entry-point: loads settings, seeds the store and serves HTTP.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use courses_api::domain::ports::CourseRepository;
use courses_api::inbound::http::health::HealthState;
use courses_api::outbound::memory::InMemoryCourseRepository;
use courses_api::seed::seed_courses_from_file;
use courses_api::settings::ServerSettings;
use server::{ServerConfig, create_server, spawn_shutdown_listener};

/// Build Prometheus middleware, logging and dropping it on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics disabled: failed to initialise Prometheus middleware");
            None
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid host {}: {e}", settings.host()),
        )
    })?;

    let courses: Arc<dyn CourseRepository> = Arc::new(InMemoryCourseRepository::new());
    if let Some(path) = settings.seed_file.as_deref() {
        seed_courses_from_file(courses.as_ref(), path)
            .await
            .map_err(io::Error::other)?;
    }

    let config = ServerConfig::new(bind_addr, courses);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("courses")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    spawn_shutdown_listener(health_state, server.handle());
    server.await
}
