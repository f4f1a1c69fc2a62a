//! Role-based authorization policy.
//!
//! A single pure decision table maps (role, action) pairs to allow/deny.
//! Everything identity-related (who the principal is) stays in the auth
//! middleware; everything contextual (team membership, record state) stays in
//! the services. This table only answers "may this role ever do this?".

use entity::{maintenance_request::RequestStatus, user::Role};

/// An action a principal may attempt against the API.
///
/// Status changes carry the target status so that the table can distinguish
/// the transitions technicians may perform from the ones reserved for
/// managers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CreateRequest,
    UpdateRequestDetails,
    ChangeRequestStatus(RequestStatus),
    AssignTechnician,
    DeleteRequest,
    ManageTeams,
    DeleteTeam,
    ManageEquipment,
    DeleteEquipment,
    ManageUsers,
    ViewReports,
}

/// Decides whether a role is ever allowed to perform an action.
///
/// Contextual checks (team membership for technicians, record existence)
/// are layered on top by the services; a `true` here is necessary but not
/// sufficient for the operation to succeed.
pub fn allows(role: Role, action: &Action) -> bool {
    match role {
        Role::Admin | Role::Manager => true,
        Role::Technician => matches!(
            action,
            Action::CreateRequest
                | Action::UpdateRequestDetails
                | Action::ChangeRequestStatus(RequestStatus::InProgress | RequestStatus::Repaired)
        ),
        Role::User => matches!(action, Action::CreateRequest | Action::UpdateRequestDetails),
    }
}
