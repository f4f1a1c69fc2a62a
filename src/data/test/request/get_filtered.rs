use super::*;

/// Tests filtering by status.
///
/// Expected: Ok with only NEW requests
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let open = factory::maintenance_request::create_request(db, equipment.id).await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .status(RequestStatus::Repaired)
        .build()
        .await?;

    let repo = MaintenanceRequestRepository::new(db);
    let (items, total) = repo
        .get_filtered(
            &RequestFilter {
                status: Some(RequestStatus::New),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].id, open.id);

    Ok(())
}

/// Tests the team scope used for technician listings.
///
/// Expected: Ok with only requests routed to teams inside the scope
#[tokio::test]
async fn scopes_to_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let mine = factory::maintenance_team::create_team(db).await?;
    let theirs = factory::maintenance_team::create_team(db).await?;

    let visible = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(mine.id)
        .build()
        .await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .auto_filled_team_id(theirs.id)
        .build()
        .await?;
    // Teamless request, invisible to any scope.
    factory::maintenance_request::create_request(db, equipment.id).await?;

    let repo = MaintenanceRequestRepository::new(db);
    let (items, total) = repo
        .get_filtered(&RequestFilter::default(), Some(&[mine.id]))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].id, visible.id);

    Ok(())
}

/// Tests that an empty scope matches nothing.
///
/// Expected: Ok with no items
#[tokio::test]
async fn empty_scope_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::maintenance_request::create_request(db, equipment.id).await?;

    let repo = MaintenanceRequestRepository::new(db);
    let (items, total) = repo.get_filtered(&RequestFilter::default(), Some(&[])).await?;

    assert_eq!(total, 0);
    assert!(items.is_empty());

    Ok(())
}

/// Tests offset pagination, newest first.
///
/// Expected: Ok with the second-newest request and the full total
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(
            factory::maintenance_request::create_request(db, equipment.id)
                .await?
                .id,
        );
    }

    let repo = MaintenanceRequestRepository::new(db);
    let (items, total) = repo
        .get_filtered(
            &RequestFilter {
                skip: Some(1),
                limit: Some(1),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(total, 3);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ids[1]);

    Ok(())
}

/// Tests that a zero limit is raised to one instead of returning nothing.
///
/// Expected: Ok with a single request and the full total
#[tokio::test]
async fn zero_limit_still_returns_a_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::maintenance_request::create_request(db, equipment.id).await?;
    factory::maintenance_request::create_request(db, equipment.id).await?;

    let repo = MaintenanceRequestRepository::new(db);
    let (items, total) = repo
        .get_filtered(
            &RequestFilter {
                limit: Some(0),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(total, 2);
    assert_eq!(items.len(), 1);

    Ok(())
}
