use super::*;

use entity::equipment::EquipmentStatus;
use sea_orm::EntityTrait;

/// Tests the SCRAP transition and its equipment side effect.
///
/// Verifies that a manager scrapping a request flips the equipment to
/// SCRAPPED in the same operation and stores the scrap reason.
///
/// Expected: Ok with SCRAP status, reason stored, equipment SCRAPPED
#[tokio::test]
async fn scrap_marks_equipment_scrapped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, equipment) = factory::helpers::create_equipment_dependencies(db).await?;
    let request = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(team.id)
        .build()
        .await?;
    let manager = factory::user::create_user_with_role(db, Role::Manager).await?;

    let updated = RequestService::new(db)
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::Scrap),
                scrap_reason: Some("Frame cracked".to_string()),
                ..Default::default()
            },
            &manager,
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::Scrap);
    assert_eq!(updated.scrap_reason.as_deref(), Some("Frame cracked"));

    let equipment = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Scrapped);

    Ok(())
}

/// Tests that the scrap reason is dropped when the status is not moving to
/// SCRAP.
///
/// Expected: Ok with no scrap reason stored
#[tokio::test]
async fn scrap_reason_ignored_without_scrap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let request = factory::maintenance_request::create_request(db, equipment.id).await?;
    let manager = factory::user::create_user_with_role(db, Role::Manager).await?;

    let updated = RequestService::new(db)
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::InProgress),
                scrap_reason: Some("Should be dropped".to_string()),
                ..Default::default()
            },
            &manager,
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::InProgress);
    assert!(updated.scrap_reason.is_none());

    Ok(())
}

/// Tests technicians working their own team's requests.
///
/// Expected: Ok for IN_PROGRESS and REPAIRED transitions
#[tokio::test]
async fn technician_can_start_and_finish_own_team_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (technician, team, equipment) = factory::helpers::create_equipment_dependencies(db).await?;
    let request = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(team.id)
        .build()
        .await?;

    let service = RequestService::new(db);

    let started = service
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::InProgress),
                ..Default::default()
            },
            &technician,
        )
        .await?;
    assert_eq!(started.status, RequestStatus::InProgress);

    let finished = service
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::Repaired),
                duration_hours: Some(2.5),
                ..Default::default()
            },
            &technician,
        )
        .await?;
    assert_eq!(finished.status, RequestStatus::Repaired);
    assert_eq!(finished.duration_hours, Some(2.5));

    Ok(())
}

/// Tests that technicians may not scrap.
///
/// Expected: Err(AppError::Forbidden) with the request untouched
#[tokio::test]
async fn technician_cannot_scrap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (technician, team, equipment) = factory::helpers::create_equipment_dependencies(db).await?;
    let request = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(team.id)
        .build()
        .await?;

    let result = RequestService::new(db)
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::Scrap),
                ..Default::default()
            },
            &technician,
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let stored = entity::prelude::MaintenanceRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, RequestStatus::New);

    Ok(())
}

/// Tests the team gate for technicians on foreign requests.
///
/// Expected: Err(AppError::Forbidden) even for an otherwise allowed change
#[tokio::test]
async fn technician_outside_team_cannot_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, equipment) = factory::helpers::create_equipment_dependencies(db).await?;
    let request = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(team.id)
        .build()
        .await?;
    let outsider = factory::user::create_technician(db).await?;

    let result = RequestService::new(db)
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::InProgress),
                ..Default::default()
            },
            &outsider,
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that plain users may edit details but not move the workflow.
///
/// Expected: Ok for a subject edit, Err(Forbidden) for a status change
#[tokio::test]
async fn plain_user_limited_to_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let request = factory::maintenance_request::create_request(db, equipment.id).await?;
    let user = factory::user::create_user(db).await?;

    let service = RequestService::new(db);

    let updated = service
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                subject: Some("Updated subject".to_string()),
                ..Default::default()
            },
            &user,
        )
        .await?;
    assert_eq!(updated.subject, "Updated subject");

    let result = service
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::InProgress),
                ..Default::default()
            },
            &user,
        )
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests the no-op status edge case: repeating the current status is not a
/// transition and passes for any principal.
///
/// Expected: Ok with the status unchanged
#[tokio::test]
async fn same_status_is_not_a_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let request = factory::maintenance_request::create_request(db, equipment.id).await?;
    let user = factory::user::create_user(db).await?;

    let updated = RequestService::new(db)
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                status: Some(RequestStatus::New),
                ..Default::default()
            },
            &user,
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::New);

    Ok(())
}

/// Tests manager-driven technician assignment and its membership gate.
///
/// Expected: Ok for a team member, Err(Forbidden) for an outsider
#[tokio::test]
async fn assignment_requires_team_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (technician, team, equipment) = factory::helpers::create_equipment_dependencies(db).await?;
    let request = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(team.id)
        .build()
        .await?;
    let manager = factory::user::create_user_with_role(db, Role::Manager).await?;
    let outsider = factory::user::create_technician(db).await?;

    let service = RequestService::new(db);

    let updated = service
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                assigned_technician_id: Some(technician.id),
                ..Default::default()
            },
            &manager,
        )
        .await?;
    assert_eq!(updated.assigned_technician_id, Some(technician.id));

    let result = service
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                assigned_technician_id: Some(outsider.id),
                ..Default::default()
            },
            &manager,
        )
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that technicians may not assign, even on their own team's
/// request.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn technician_cannot_assign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (technician, team, equipment) = factory::helpers::create_equipment_dependencies(db).await?;
    let request = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(team.id)
        .build()
        .await?;

    let result = RequestService::new(db)
        .update(
            request.id,
            UpdateMaintenanceRequestDto {
                assigned_technician_id: Some(technician.id),
                ..Default::default()
            },
            &technician,
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
