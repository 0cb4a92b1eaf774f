//! Course catalogue service library.
//!
//! Layout follows a ports-and-adapters split: [`domain`] holds the course
//! model, services and ports; [`inbound`] adapts HTTP onto the driving ports;
//! [`outbound`] implements the storage port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
