//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COURSES_*` environment variables and an
//! optional configuration file, in the precedence OrthoConfig applies.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration for the HTTP server and its startup data.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURSES")]
pub struct ServerSettings {
    /// Interface the server binds to.
    pub host: Option<String>,
    /// TCP port the server listens on.
    pub port: Option<u16>,
    /// JSON file of courses stored at startup.
    pub seed_file: Option<PathBuf>,
}

impl ServerSettings {
    /// Bind host, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Bind port, defaulting to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address assembled from [`Self::host`] and [`Self::port`].
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
