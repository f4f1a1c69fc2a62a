pub mod equipment;
pub mod maintenance_request;
pub mod maintenance_team;
pub mod team_member;
pub mod user;

pub mod prelude;
