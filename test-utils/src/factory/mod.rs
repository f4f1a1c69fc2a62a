//! Entity factories for test data.
//!
//! Each factory creates one entity type with sensible defaults that can be
//! overridden through a builder pattern, keeping test setup terse.

pub mod equipment;
pub mod helpers;
pub mod maintenance_request;
pub mod maintenance_team;
pub mod team_member;
pub mod user;
