//! Maintenance request repository.
//!
//! Generic over the connection so the workflow engine can run status
//! transitions and their side effects inside one transaction. Also hosts the
//! aggregation queries behind the reporting endpoints.

use chrono::{NaiveDate, Utc};
use entity::maintenance_request::{RequestStatus, RequestType};
use sea_orm::{
    sea_query::{Alias, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::request::{CreateRequestParams, RequestFilter, UpdateRequestChanges};

/// Default page size for request listings.
pub const DEFAULT_PAGE_SIZE: u64 = 100;
/// Upper bound on requested page sizes.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Repository providing database operations for maintenance requests.
pub struct MaintenanceRequestRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceRequestRepository<'a, C> {
    /// Creates a new MaintenanceRequestRepository instance.
    ///
    /// # Arguments
    /// - `conn` - Database connection or open transaction
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new maintenance request in NEW status.
    ///
    /// # Returns
    /// - `Ok(entity::maintenance_request::Model)` - The created request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateRequestParams,
    ) -> Result<entity::maintenance_request::Model, DbErr> {
        entity::maintenance_request::ActiveModel {
            subject: ActiveValue::Set(params.subject),
            description: ActiveValue::Set(params.description),
            equipment_id: ActiveValue::Set(params.equipment_id),
            auto_filled_team_id: ActiveValue::Set(params.auto_filled_team_id),
            assigned_technician_id: ActiveValue::Set(params.assigned_technician_id),
            request_type: ActiveValue::Set(params.request_type),
            scheduled_date: ActiveValue::Set(params.scheduled_date),
            duration_hours: ActiveValue::Set(params.duration_hours),
            status: ActiveValue::Set(RequestStatus::New),
            created_by_id: ActiveValue::Set(params.created_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Finds a request by primary key.
    pub async fn get_by_id(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find_by_id(request_id)
            .one(self.conn)
            .await
    }

    /// Lists requests matching the filter, with the unpaginated total.
    ///
    /// `team_scope`, when present, restricts results to requests whose
    /// auto-filled team is in the given set. An empty scope matches nothing.
    /// Results are newest first.
    ///
    /// # Returns
    /// - `Ok((items, total))` - One page of requests plus the filtered total
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(
        &self,
        filter: &RequestFilter,
        team_scope: Option<&[i32]>,
    ) -> Result<(Vec<entity::maintenance_request::Model>, u64), DbErr> {
        let mut query = entity::prelude::MaintenanceRequest::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::maintenance_request::Column::Status.eq(status));
        }
        if let Some(request_type) = filter.request_type {
            query = query.filter(entity::maintenance_request::Column::RequestType.eq(request_type));
        }
        if let Some(equipment_id) = filter.equipment_id {
            query = query.filter(entity::maintenance_request::Column::EquipmentId.eq(equipment_id));
        }
        if let Some(team_id) = filter.team_id {
            query =
                query.filter(entity::maintenance_request::Column::AutoFilledTeamId.eq(team_id));
        }
        if let Some(scope) = team_scope {
            query = query.filter(
                entity::maintenance_request::Column::AutoFilledTeamId.is_in(scope.iter().copied()),
            );
        }

        let total = query.clone().count(self.conn).await?;

        let skip = filter.skip.unwrap_or(0);
        let limit = filter
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let items = query
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok((items, total))
    }

    /// Applies the changes the workflow engine decided on.
    ///
    /// Only columns present in `changes` are written; `updated_at` is always
    /// refreshed.
    ///
    /// # Returns
    /// - `Ok(entity::maintenance_request::Model)` - The updated request
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        request_id: i32,
        changes: UpdateRequestChanges,
    ) -> Result<entity::maintenance_request::Model, DbErr> {
        let mut active = entity::maintenance_request::ActiveModel {
            id: ActiveValue::Unchanged(request_id),
            updated_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        };

        if let Some(subject) = changes.subject {
            active.subject = ActiveValue::Set(subject);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(technician_id) = changes.assigned_technician_id {
            active.assigned_technician_id = ActiveValue::Set(Some(technician_id));
        }
        if let Some(scheduled_date) = changes.scheduled_date {
            active.scheduled_date = ActiveValue::Set(Some(scheduled_date));
        }
        if let Some(duration_hours) = changes.duration_hours {
            active.duration_hours = ActiveValue::Set(Some(duration_hours));
        }
        if let Some(status) = changes.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(scrap_reason) = changes.scrap_reason {
            active.scrap_reason = ActiveValue::Set(Some(scrap_reason));
        }

        active.update(self.conn).await
    }

    /// Deletes a request.
    pub async fn delete(&self, request_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MaintenanceRequest::delete_by_id(request_id)
            .exec(self.conn)
            .await
    }

    /// Lists all requests against one piece of equipment, newest first.
    pub async fn get_by_equipment(
        &self,
        equipment_id: i32,
    ) -> Result<Vec<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::EquipmentId.eq(equipment_id))
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .all(self.conn)
            .await
    }

    /// Counts open (NEW or IN_PROGRESS) requests against one piece of
    /// equipment.
    pub async fn count_open_for_equipment(&self, equipment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::EquipmentId.eq(equipment_id))
            .filter(
                entity::maintenance_request::Column::Status
                    .is_in([RequestStatus::New, RequestStatus::InProgress]),
            )
            .count(self.conn)
            .await
    }

    /// Lists preventive requests with a scheduled date, joined with their
    /// equipment, optionally bounded by a date window and scoped to a set of
    /// teams.
    ///
    /// # Returns
    /// - `Ok(Vec<(request, Option<equipment>)>)` - Requests ordered by scheduled date
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_preventive_window(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        team_scope: Option<&[i32]>,
    ) -> Result<
        Vec<(
            entity::maintenance_request::Model,
            Option<entity::equipment::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::RequestType.eq(RequestType::Preventive))
            .filter(entity::maintenance_request::Column::ScheduledDate.is_not_null());

        if let Some(start_date) = start_date {
            query =
                query.filter(entity::maintenance_request::Column::ScheduledDate.gte(start_date));
        }
        if let Some(end_date) = end_date {
            query = query.filter(entity::maintenance_request::Column::ScheduledDate.lte(end_date));
        }

        if let Some(scope) = team_scope {
            query = query.filter(
                entity::maintenance_request::Column::AutoFilledTeamId.is_in(scope.iter().copied()),
            );
        }

        query
            .find_also_related(entity::prelude::Equipment)
            .order_by_asc(entity::maintenance_request::Column::ScheduledDate)
            .all(self.conn)
            .await
    }

    /// Counts requests grouped by team name.
    ///
    /// Requests without a team come back with a `None` name.
    ///
    /// # Returns
    /// - `Ok(Vec<(Option<team_name>, count)>)` - One row per team
    /// - `Err(DbErr)` - Database error during query
    pub async fn counts_per_team(&self) -> Result<Vec<(Option<String>, i64)>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .select_only()
            .column(entity::maintenance_team::Column::TeamName)
            .column_as(entity::maintenance_request::Column::Id.count(), "request_count")
            .join(
                JoinType::LeftJoin,
                entity::maintenance_request::Relation::MaintenanceTeam.def(),
            )
            .group_by(entity::maintenance_team::Column::TeamName)
            .into_tuple()
            .all(self.conn)
            .await
    }

    /// Counts requests grouped by equipment name, busiest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of equipment rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<(equipment_name, count)>)` - Rows ordered by count descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn counts_per_equipment(&self, limit: u64) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .select_only()
            .column(entity::equipment::Column::Name)
            .column_as(entity::maintenance_request::Column::Id.count(), "request_count")
            .join(
                JoinType::InnerJoin,
                entity::maintenance_request::Relation::Equipment.def(),
            )
            .group_by(entity::equipment::Column::Name)
            .order_by_desc(Expr::col(Alias::new("request_count")))
            .limit(limit)
            .into_tuple()
            .all(self.conn)
            .await
    }

    /// Counts requests of one type.
    pub async fn count_by_type(&self, request_type: RequestType) -> Result<u64, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::RequestType.eq(request_type))
            .count(self.conn)
            .await
    }
}
