//! Data repositories wrapping SeaORM queries.
//!
//! Repositories translate between entity models and the query surface the
//! services need. They never make authorization decisions.

pub mod equipment;
pub mod request;
pub mod team;
pub mod team_member;
pub mod user;
