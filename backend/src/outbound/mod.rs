//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process course store used by the server binary and tests.

pub mod memory;
