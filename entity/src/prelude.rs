pub use super::equipment::Entity as Equipment;
pub use super::maintenance_request::Entity as MaintenanceRequest;
pub use super::maintenance_team::Entity as MaintenanceTeam;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;
