//! Ambient service plumbing: health endpoints, request-id layers, timestamp
//! serialization, and tracing init.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
