//! HTTP handlers. Thin layer: resolve the principal, delegate to a
//! service, shape the response.

pub mod auth;
pub mod equipment;
pub mod health;
pub mod report;
pub mod request;
pub mod team;
