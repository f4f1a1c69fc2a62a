use super::*;

/// Tests grouping request counts by team name.
///
/// Expected: Ok with one row per team and a None row for teamless requests
#[tokio::test]
async fn groups_by_team_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let mechanics =
        factory::maintenance_team::create_team_named(db, "Mechanics".to_string()).await?;
    let electricians =
        factory::maintenance_team::create_team_named(db, "Electricians".to_string()).await?;

    for _ in 0..2 {
        factory::maintenance_request::RequestFactory::new(db, equipment.id)
            .auto_filled_team_id(mechanics.id)
            .build()
            .await?;
    }
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(electricians.id)
        .build()
        .await?;
    factory::maintenance_request::create_request(db, equipment.id).await?;

    let repo = MaintenanceRequestRepository::new(db);
    let rows = repo.counts_per_team().await?;

    assert_eq!(rows.len(), 3);
    let count_for = |name: Option<&str>| {
        rows.iter()
            .find(|(n, _)| n.as_deref() == name)
            .map(|(_, c)| *c)
    };
    assert_eq!(count_for(Some("Mechanics")), Some(2));
    assert_eq!(count_for(Some("Electricians")), Some(1));
    assert_eq!(count_for(None), Some(1));

    Ok(())
}
