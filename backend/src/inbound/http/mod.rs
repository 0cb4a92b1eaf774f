//! HTTP inbound adapter exposing the course REST endpoints.

pub mod courses;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
