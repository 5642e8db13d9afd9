//! Shared service plumbing for the Atrium portal backend: env config,
//! health endpoints, request-id middleware, serde helpers and tracing setup.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
