use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting equipment removes its maintenance history too.
///
/// Expected: Ok(()) and no surviving requests
#[tokio::test]
async fn cascades_to_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::maintenance_request::create_request(db, equipment.id).await?;

    EquipmentService::new(db).delete(equipment.id).await?;

    let surviving = entity::prelude::MaintenanceRequest::find().count(db).await?;
    assert_eq!(surviving, 0);

    Ok(())
}

/// Tests deleting a missing record.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_equipment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EquipmentService::new(db).delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
