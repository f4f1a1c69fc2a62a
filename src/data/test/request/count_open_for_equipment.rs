use super::*;

/// Tests the open request count behind the equipment smart button.
///
/// Expected: Ok(2) counting NEW and IN_PROGRESS but not closed requests
#[tokio::test]
async fn counts_only_open_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::maintenance_request::create_request(db, equipment.id).await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .status(RequestStatus::InProgress)
        .build()
        .await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .status(RequestStatus::Repaired)
        .build()
        .await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .status(RequestStatus::Scrap)
        .build()
        .await?;

    let repo = MaintenanceRequestRepository::new(db);

    assert_eq!(repo.count_open_for_equipment(equipment.id).await?, 2);

    Ok(())
}

/// Tests that other equipment's requests are not counted.
///
/// Expected: Ok(0) for a unit with no requests
#[tokio::test]
async fn scopes_to_one_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::equipment::create_equipment(db).await?;
    let idle = factory::equipment::create_equipment(db).await?;
    factory::maintenance_request::create_request(db, busy.id).await?;

    let repo = MaintenanceRequestRepository::new(db);

    assert_eq!(repo.count_open_for_equipment(idle.id).await?, 0);

    Ok(())
}
