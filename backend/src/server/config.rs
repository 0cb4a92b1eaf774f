//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use courses_api::domain::ports::CourseRepository;

/// Everything [`super::create_server`] needs to start serving.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) courses: Arc<dyn CourseRepository>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Configuration serving `courses` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, courses: Arc<dyn CourseRepository>) -> Self {
        Self {
            bind_addr,
            courses,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
