//! Business logic services.
//!
//! Services own validation, conflict detection, and the maintenance
//! workflow rules. Controllers stay thin and repositories stay dumb.

pub mod auth;
pub mod equipment;
pub mod report;
pub mod request;
pub mod team;
