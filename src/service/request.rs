//! The maintenance request workflow engine.
//!
//! All request mutations funnel through here. Creation auto-fills the
//! responsible team and default technician from the equipment record;
//! updates enforce the role policy and the technician team-membership gate
//! before any column is written, and run the SCRAP side effect in the same
//! transaction as the status change.

use entity::{
    maintenance_request::{RequestStatus, RequestType},
    user::Role,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        equipment::EquipmentRepository, request::MaintenanceRequestRepository,
        team_member::TeamMembershipRepository,
    },
    error::AppError,
    model::request::{
        CalendarEventDto, CalendarQuery, CreateMaintenanceRequestDto, CreateRequestParams,
        MaintenanceRequestDto, RequestFilter, UpdateMaintenanceRequestDto, UpdateRequestChanges,
        compute_is_overdue,
    },
    policy::{self, Action},
};

/// Service implementing the maintenance request workflow.
pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    /// Creates a new RequestService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a maintenance request.
    ///
    /// The responsible team is always copied from the equipment record. When
    /// the payload names no technician, the equipment's default technician
    /// is used. Whoever ends up assigned must belong to the responsible
    /// team.
    ///
    /// # Arguments
    /// - `dto` - Creation payload
    /// - `principal` - The authenticated user creating the request
    ///
    /// # Returns
    /// - `Ok(MaintenanceRequestDto)` - The created request in NEW status
    /// - `Err(AppError::NotFound)` - Equipment missing
    /// - `Err(AppError::Validation)` - PREVENTIVE request without a scheduled date
    /// - `Err(AppError::Forbidden)` - Assigned technician not on the team
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        dto: CreateMaintenanceRequestDto,
        principal: &entity::user::Model,
    ) -> Result<MaintenanceRequestDto, AppError> {
        let Some(equipment) = EquipmentRepository::new(self.db)
            .get_by_id(dto.equipment_id)
            .await?
        else {
            return Err(AppError::NotFound("Equipment not found".to_string()));
        };

        if dto.request_type == RequestType::Preventive && dto.scheduled_date.is_none() {
            return Err(AppError::Validation(
                "Scheduled date is required for preventive requests".to_string(),
            ));
        }

        let auto_filled_team_id = equipment.maintenance_team_id;
        let assigned_technician_id = dto
            .assigned_technician_id
            .or(equipment.default_technician_id);

        // The roster gate only applies when a team was routed.
        if let (Some(technician_id), Some(team_id)) = (assigned_technician_id, auto_filled_team_id)
        {
            let on_team = TeamMembershipRepository::new(self.db)
                .is_member(technician_id, Some(team_id))
                .await?;
            if !on_team {
                return Err(AppError::Forbidden(
                    "Technician is not a member of the equipment's maintenance team".to_string(),
                ));
            }
        }

        let request = MaintenanceRequestRepository::new(self.db)
            .create(CreateRequestParams {
                subject: dto.subject,
                description: dto.description,
                equipment_id: equipment.id,
                auto_filled_team_id,
                assigned_technician_id,
                request_type: dto.request_type,
                scheduled_date: dto.scheduled_date,
                duration_hours: dto.duration_hours,
                created_by_id: Some(principal.id),
            })
            .await?;

        Ok(MaintenanceRequestDto::from_entity(request))
    }

    /// Fetches one request.
    ///
    /// Technicians can only see requests routed to one of their teams.
    ///
    /// # Returns
    /// - `Ok(MaintenanceRequestDto)` - The request
    /// - `Err(AppError::NotFound)` - No request with that id
    /// - `Err(AppError::Forbidden)` - Technician outside the responsible team
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(
        &self,
        request_id: i32,
        principal: &entity::user::Model,
    ) -> Result<MaintenanceRequestDto, AppError> {
        let request = self.require_request(request_id).await?;
        self.check_team_gate(&request, principal, "view").await?;

        Ok(MaintenanceRequestDto::from_entity(request))
    }

    /// Lists requests matching the filter.
    ///
    /// Technicians only see requests routed to their teams; other roles see
    /// everything the filter matches.
    ///
    /// # Returns
    /// - `Ok((items, total))` - One page of requests plus the filtered total
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_filtered(
        &self,
        filter: &RequestFilter,
        principal: &entity::user::Model,
    ) -> Result<(Vec<MaintenanceRequestDto>, u64), AppError> {
        let team_scope = self.team_scope(principal).await?;

        let (items, total) = MaintenanceRequestRepository::new(self.db)
            .get_filtered(filter, team_scope.as_deref())
            .await?;

        Ok((
            items
                .into_iter()
                .map(MaintenanceRequestDto::from_entity)
                .collect(),
            total,
        ))
    }

    /// Applies a partial update to a request.
    ///
    /// Status changes and technician assignment go through the role policy;
    /// technicians additionally must belong to the responsible team. A
    /// transition to SCRAP marks the equipment as SCRAPPED in the same
    /// transaction; a missing equipment row downgrades that side effect to a
    /// log line instead of failing the update. The scrap reason is only
    /// stored alongside a SCRAP transition.
    ///
    /// # Arguments
    /// - `request_id` - Request to update
    /// - `dto` - Partial update payload
    /// - `principal` - The authenticated user performing the update
    ///
    /// # Returns
    /// - `Ok(MaintenanceRequestDto)` - The updated request
    /// - `Err(AppError::NotFound)` - No request with that id
    /// - `Err(AppError::Forbidden)` - Policy or team-membership gate failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        request_id: i32,
        dto: UpdateMaintenanceRequestDto,
        principal: &entity::user::Model,
    ) -> Result<MaintenanceRequestDto, AppError> {
        let request = self.require_request(request_id).await?;
        self.check_team_gate(&request, principal, "update").await?;

        // A no-op status (same as current) is not a transition and needs no
        // policy check.
        let status_change = dto.status.filter(|status| *status != request.status);

        if let Some(target) = status_change {
            if !policy::allows(principal.role, &Action::ChangeRequestStatus(target)) {
                return Err(AppError::Forbidden(
                    "Not authorized to change the request to this status".to_string(),
                ));
            }
        }

        if let Some(technician_id) = dto.assigned_technician_id {
            if !policy::allows(principal.role, &Action::AssignTechnician) {
                return Err(AppError::Forbidden(
                    "Not authorized to assign technicians".to_string(),
                ));
            }

            let on_team = TeamMembershipRepository::new(self.db)
                .is_member(technician_id, request.auto_filled_team_id)
                .await?;
            if !on_team {
                return Err(AppError::Forbidden(
                    "Technician is not a member of the equipment's maintenance team".to_string(),
                ));
            }
        }

        let changes = UpdateRequestChanges {
            subject: dto.subject,
            description: dto.description,
            assigned_technician_id: dto.assigned_technician_id,
            scheduled_date: dto.scheduled_date,
            duration_hours: dto.duration_hours,
            status: status_change,
            scrap_reason: if status_change == Some(RequestStatus::Scrap) {
                dto.scrap_reason
            } else {
                None
            },
        };

        let txn = self.db.begin().await?;

        if status_change == Some(RequestStatus::Scrap) {
            let equipment_repo = EquipmentRepository::new(&txn);
            match equipment_repo.get_by_id(request.equipment_id).await? {
                Some(equipment) => {
                    equipment_repo.mark_scrapped(equipment.id).await?;
                }
                None => {
                    tracing::debug!(
                        request_id,
                        equipment_id = request.equipment_id,
                        "equipment row missing while scrapping, skipping status side effect"
                    );
                }
            }
        }

        let updated = MaintenanceRequestRepository::new(&txn)
            .update(request_id, changes)
            .await?;

        txn.commit().await?;

        Ok(MaintenanceRequestDto::from_entity(updated))
    }

    /// Deletes a request.
    ///
    /// # Returns
    /// - `Ok(())` - Request deleted
    /// - `Err(AppError::NotFound)` - No request with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, request_id: i32) -> Result<(), AppError> {
        self.require_request(request_id).await?;

        MaintenanceRequestRepository::new(self.db)
            .delete(request_id)
            .await?;

        Ok(())
    }

    /// Lists scheduled preventive requests as calendar events, optionally
    /// bounded by a date window and scoped to the technician's teams.
    ///
    /// # Returns
    /// - `Ok(Vec<CalendarEventDto>)` - Events ordered by scheduled date
    /// - `Err(AppError::Validation)` - Window end before its start
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn preventive_calendar(
        &self,
        query: &CalendarQuery,
        principal: &entity::user::Model,
    ) -> Result<Vec<CalendarEventDto>, AppError> {
        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if end < start {
                return Err(AppError::Validation(
                    "end_date must not be before start_date".to_string(),
                ));
            }
        }

        let team_scope = self.team_scope(principal).await?;

        let rows = MaintenanceRequestRepository::new(self.db)
            .list_preventive_window(query.start_date, query.end_date, team_scope.as_deref())
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(request, equipment)| {
                let date = request.scheduled_date?;
                Some(CalendarEventDto {
                    id: request.id,
                    title: request.subject,
                    date,
                    equipment_name: equipment.map(|e| e.name),
                    status: request.status,
                    is_overdue: compute_is_overdue(Some(date), request.status),
                })
            })
            .collect())
    }

    /// Resolves the team scope for listings: technicians are confined to
    /// their teams, everyone else is unscoped.
    async fn team_scope(&self, principal: &entity::user::Model) -> Result<Option<Vec<i32>>, AppError> {
        if principal.role != Role::Technician {
            return Ok(None);
        }

        let team_ids = TeamMembershipRepository::new(self.db)
            .team_ids_for_user(principal.id)
            .await?;

        Ok(Some(team_ids))
    }

    /// Rejects technicians that are not on the request's responsible team.
    async fn check_team_gate(
        &self,
        request: &entity::maintenance_request::Model,
        principal: &entity::user::Model,
        verb: &str,
    ) -> Result<(), AppError> {
        if principal.role != Role::Technician {
            return Ok(());
        }

        let on_team = TeamMembershipRepository::new(self.db)
            .is_member(principal.id, request.auto_filled_team_id)
            .await?;

        if !on_team {
            return Err(AppError::Forbidden(format!(
                "Not authorized to {verb} this request"
            )));
        }

        Ok(())
    }

    async fn require_request(
        &self,
        request_id: i32,
    ) -> Result<entity::maintenance_request::Model, AppError> {
        MaintenanceRequestRepository::new(self.db)
            .get_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance request not found".to_string()))
    }
}
