use super::*;

/// Tests the busiest-equipment aggregation.
///
/// Expected: Ok with rows ordered by count descending and capped by the
/// limit
#[tokio::test]
async fn orders_by_count_and_limits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let press = factory::equipment::EquipmentFactory::new(db)
        .name("Press")
        .build()
        .await?;
    let lathe = factory::equipment::EquipmentFactory::new(db)
        .name("Lathe")
        .build()
        .await?;
    let saw = factory::equipment::EquipmentFactory::new(db)
        .name("Saw")
        .build()
        .await?;

    for _ in 0..3 {
        factory::maintenance_request::create_request(db, press.id).await?;
    }
    for _ in 0..2 {
        factory::maintenance_request::create_request(db, lathe.id).await?;
    }
    factory::maintenance_request::create_request(db, saw.id).await?;

    let repo = MaintenanceRequestRepository::new(db);
    let rows = repo.counts_per_equipment(2).await?;

    assert_eq!(
        rows,
        vec![("Press".to_string(), 3), ("Lathe".to_string(), 2)]
    );

    Ok(())
}

/// Tests counting by request type.
///
/// Expected: Ok with the per-type totals
#[tokio::test]
async fn counts_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::maintenance_request::create_request(db, equipment.id).await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .request_type(RequestType::Preventive)
        .scheduled_date(chrono::Utc::now().date_naive())
        .build()
        .await?;

    let repo = MaintenanceRequestRepository::new(db);

    assert_eq!(repo.count_by_type(RequestType::Corrective).await?, 1);
    assert_eq!(repo.count_by_type(RequestType::Preventive).await?, 1);

    Ok(())
}
