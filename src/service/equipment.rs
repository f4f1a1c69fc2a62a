//! Equipment catalogue management.

use sea_orm::DatabaseConnection;

use crate::{
    data::{equipment::EquipmentRepository, request::MaintenanceRequestRepository},
    error::AppError,
    model::{
        equipment::{CreateEquipmentDto, EquipmentDto, EquipmentFilter, EquipmentListDto},
        request::MaintenanceRequestDto,
    },
};

/// Service for the equipment catalogue.
pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    /// Creates a new EquipmentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new piece of equipment.
    ///
    /// # Returns
    /// - `Ok(EquipmentDto)` - The created record
    /// - `Err(AppError::Validation)` - Empty equipment name
    /// - `Err(AppError::Conflict)` - Serial number already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, dto: CreateEquipmentDto) -> Result<EquipmentDto, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Equipment name must not be empty".to_string(),
            ));
        }

        let equipment_repo = EquipmentRepository::new(self.db);

        if let Some(serial) = dto.serial_number.as_deref() {
            if equipment_repo.serial_exists(serial, None).await? {
                return Err(AppError::Conflict(
                    "Serial number already in use".to_string(),
                ));
            }
        }

        let equipment = equipment_repo.create(dto).await?;

        Ok(EquipmentDto::from_entity(equipment, 0))
    }

    /// Fetches one equipment record with its open request count.
    ///
    /// # Returns
    /// - `Ok(EquipmentDto)` - The record
    /// - `Err(AppError::NotFound)` - No equipment with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, equipment_id: i32) -> Result<EquipmentDto, AppError> {
        let equipment = self.require_equipment(equipment_id).await?;

        let open_count = MaintenanceRequestRepository::new(self.db)
            .count_open_for_equipment(equipment_id)
            .await?;

        Ok(EquipmentDto::from_entity(equipment, open_count))
    }

    /// Lists equipment matching the filter, each with its open request
    /// count, plus the unpaginated total.
    pub async fn get_filtered(&self, filter: &EquipmentFilter) -> Result<EquipmentListDto, AppError> {
        let (items, total) = EquipmentRepository::new(self.db).get_filtered(filter).await?;

        let request_repo = MaintenanceRequestRepository::new(self.db);

        let mut dtos = Vec::with_capacity(items.len());
        for equipment in items {
            let open_count = request_repo.count_open_for_equipment(equipment.id).await?;
            dtos.push(EquipmentDto::from_entity(equipment, open_count));
        }

        Ok(EquipmentListDto { items: dtos, total })
    }

    /// Replaces an equipment record's fields.
    ///
    /// # Returns
    /// - `Ok(EquipmentDto)` - The updated record
    /// - `Err(AppError::NotFound)` - No equipment with that id
    /// - `Err(AppError::Validation)` - Empty equipment name
    /// - `Err(AppError::Conflict)` - Serial number taken by another record
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        equipment_id: i32,
        dto: CreateEquipmentDto,
    ) -> Result<EquipmentDto, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Equipment name must not be empty".to_string(),
            ));
        }

        self.require_equipment(equipment_id).await?;

        let equipment_repo = EquipmentRepository::new(self.db);

        if let Some(serial) = dto.serial_number.as_deref() {
            if equipment_repo.serial_exists(serial, Some(equipment_id)).await? {
                return Err(AppError::Conflict(
                    "Serial number already in use".to_string(),
                ));
            }
        }

        let equipment = equipment_repo.update(equipment_id, dto).await?;

        let open_count = MaintenanceRequestRepository::new(self.db)
            .count_open_for_equipment(equipment_id)
            .await?;

        Ok(EquipmentDto::from_entity(equipment, open_count))
    }

    /// Deletes an equipment record. Its maintenance requests cascade.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted
    /// - `Err(AppError::NotFound)` - No equipment with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, equipment_id: i32) -> Result<(), AppError> {
        self.require_equipment(equipment_id).await?;

        EquipmentRepository::new(self.db).delete(equipment_id).await?;

        Ok(())
    }

    /// Lists the maintenance history of one piece of equipment, newest
    /// first.
    ///
    /// # Returns
    /// - `Ok(Vec<MaintenanceRequestDto>)` - All requests against the unit
    /// - `Err(AppError::NotFound)` - No equipment with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn requests(&self, equipment_id: i32) -> Result<Vec<MaintenanceRequestDto>, AppError> {
        self.require_equipment(equipment_id).await?;

        let requests = MaintenanceRequestRepository::new(self.db)
            .get_by_equipment(equipment_id)
            .await?;

        Ok(requests
            .into_iter()
            .map(MaintenanceRequestDto::from_entity)
            .collect())
    }

    async fn require_equipment(
        &self,
        equipment_id: i32,
    ) -> Result<entity::equipment::Model, AppError> {
        EquipmentRepository::new(self.db)
            .get_by_id(equipment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }
}
