//! Request and response payloads exchanged with API clients.

pub mod api;
pub mod equipment;
pub mod report;
pub mod request;
pub mod team;
pub mod user;
