//! Equipment repository.
//!
//! Generic over the connection so the same queries run on the pooled
//! connection and inside workflow transactions.

use chrono::Utc;
use entity::equipment::EquipmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::equipment::{CreateEquipmentDto, EquipmentFilter};

/// Default page size for equipment listings.
pub const DEFAULT_PAGE_SIZE: u64 = 100;
/// Upper bound on requested page sizes.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Repository providing database operations for equipment records.
pub struct EquipmentRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    /// Creates a new EquipmentRepository instance.
    ///
    /// # Arguments
    /// - `conn` - Database connection or open transaction
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new equipment record.
    ///
    /// # Returns
    /// - `Ok(entity::equipment::Model)` - The created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, dto: CreateEquipmentDto) -> Result<entity::equipment::Model, DbErr> {
        entity::equipment::ActiveModel {
            name: ActiveValue::Set(dto.name),
            serial_number: ActiveValue::Set(dto.serial_number),
            department: ActiveValue::Set(dto.department),
            assigned_employee_id: ActiveValue::Set(dto.assigned_employee_id),
            purchase_date: ActiveValue::Set(dto.purchase_date),
            warranty_expiry: ActiveValue::Set(dto.warranty_expiry),
            location: ActiveValue::Set(dto.location),
            maintenance_team_id: ActiveValue::Set(dto.maintenance_team_id),
            default_technician_id: ActiveValue::Set(dto.default_technician_id),
            status: ActiveValue::Set(dto.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Finds an equipment record by primary key.
    pub async fn get_by_id(
        &self,
        equipment_id: i32,
    ) -> Result<Option<entity::equipment::Model>, DbErr> {
        entity::prelude::Equipment::find_by_id(equipment_id)
            .one(self.conn)
            .await
    }

    /// Lists equipment matching the filter, with the unpaginated total.
    ///
    /// `skip`/`limit` paginate with an offset; the limit is clamped to
    /// `1..=MAX_PAGE_SIZE` and defaults to [`DEFAULT_PAGE_SIZE`]. The search
    /// term matches name, serial number, and location as substrings.
    ///
    /// # Returns
    /// - `Ok((items, total))` - One page of records plus the filtered total
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(
        &self,
        filter: &EquipmentFilter,
    ) -> Result<(Vec<entity::equipment::Model>, u64), DbErr> {
        let mut query = entity::prelude::Equipment::find();

        if let Some(search) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(entity::equipment::Column::Name.contains(search))
                    .add(entity::equipment::Column::SerialNumber.contains(search))
                    .add(entity::equipment::Column::Location.contains(search)),
            );
        }
        if let Some(department) = filter.department.as_deref() {
            query = query.filter(entity::equipment::Column::Department.eq(department));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::equipment::Column::Status.eq(status));
        }

        let total = query.clone().count(self.conn).await?;

        let skip = filter.skip.unwrap_or(0);
        let limit = filter
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let items = query
            .order_by_asc(entity::equipment::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok((items, total))
    }

    /// Replaces all mutable fields of an equipment record.
    ///
    /// # Returns
    /// - `Ok(entity::equipment::Model)` - The updated record
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        equipment_id: i32,
        dto: CreateEquipmentDto,
    ) -> Result<entity::equipment::Model, DbErr> {
        entity::equipment::ActiveModel {
            id: ActiveValue::Unchanged(equipment_id),
            name: ActiveValue::Set(dto.name),
            serial_number: ActiveValue::Set(dto.serial_number),
            department: ActiveValue::Set(dto.department),
            assigned_employee_id: ActiveValue::Set(dto.assigned_employee_id),
            purchase_date: ActiveValue::Set(dto.purchase_date),
            warranty_expiry: ActiveValue::Set(dto.warranty_expiry),
            location: ActiveValue::Set(dto.location),
            maintenance_team_id: ActiveValue::Set(dto.maintenance_team_id),
            default_technician_id: ActiveValue::Set(dto.default_technician_id),
            status: ActiveValue::Set(dto.status),
            updated_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.conn)
        .await
    }

    /// Marks a unit as scrapped. Idempotent at the column level.
    pub async fn mark_scrapped(
        &self,
        equipment_id: i32,
    ) -> Result<entity::equipment::Model, DbErr> {
        entity::equipment::ActiveModel {
            id: ActiveValue::Unchanged(equipment_id),
            status: ActiveValue::Set(EquipmentStatus::Scrapped),
            updated_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.conn)
        .await
    }

    /// Deletes an equipment record. Its requests cascade at the database
    /// level.
    pub async fn delete(&self, equipment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Equipment::delete_by_id(equipment_id)
            .exec(self.conn)
            .await
    }

    /// Checks whether a serial number is already taken, optionally ignoring
    /// one equipment id (for updates).
    ///
    /// # Returns
    /// - `Ok(true)` - Another record already uses the serial number
    /// - `Ok(false)` - The serial number is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn serial_exists(
        &self,
        serial_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::SerialNumber.eq(serial_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::equipment::Column::Id.ne(id));
        }

        Ok(query.count(self.conn).await? > 0)
    }
}
