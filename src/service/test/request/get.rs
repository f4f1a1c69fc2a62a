use super::*;

/// Tests the technician read gate.
///
/// Expected: Ok for a team member, Err(Forbidden) for an outsider
#[tokio::test]
async fn technician_read_is_team_gated() -> Result<(), AppError> {
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
    let outsider = factory::user::create_technician(db).await?;

    let service = RequestService::new(db);

    let dto = service.get(request.id, &technician).await?;
    assert_eq!(dto.id, request.id);

    let result = service.get(request.id, &outsider).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that other roles read without a team gate.
///
/// Expected: Ok for a plain user on a teamless request
#[tokio::test]
async fn other_roles_read_unscoped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let request = factory::maintenance_request::create_request(db, equipment.id).await?;
    let user = factory::user::create_user(db).await?;

    let dto = RequestService::new(db).get(request.id, &user).await?;

    assert_eq!(dto.id, request.id);

    Ok(())
}

/// Tests fetching a missing request.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = RequestService::new(db).get(9999, &user).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
