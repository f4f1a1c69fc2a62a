use super::*;

/// Tests adding a technician with an explicit display name.
///
/// Expected: Ok(TeamDto) with the member on the roster
#[tokio::test]
async fn adds_technician() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::maintenance_team::create_team(db).await?;
    let technician = factory::user::create_technician(db).await?;

    let dto = TeamService::new(db)
        .add_member(
            team.id,
            AddTeamMemberDto {
                user_id: technician.id,
                display_name: Some("Night shift".to_string()),
            },
        )
        .await?;

    assert_eq!(dto.members.len(), 1);
    assert_eq!(dto.members[0].user_id, technician.id);
    assert_eq!(dto.members[0].display_name.as_deref(), Some("Night shift"));

    Ok(())
}

/// Tests the display name fallback chain: full name first, then username.
///
/// Expected: Ok with the user's full name as display name
#[tokio::test]
async fn falls_back_to_full_name_then_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::maintenance_team::create_team(db).await?;

    let named = factory::user::UserFactory::new(db)
        .role(Role::Technician)
        .full_name(Some("Sam Smith".to_string()))
        .build()
        .await?;
    let anonymous = factory::user::UserFactory::new(db)
        .role(Role::Technician)
        .username("ssmith2")
        .full_name(None)
        .build()
        .await?;

    let service = TeamService::new(db);
    service
        .add_member(
            team.id,
            AddTeamMemberDto {
                user_id: named.id,
                display_name: None,
            },
        )
        .await?;
    let dto = service
        .add_member(
            team.id,
            AddTeamMemberDto {
                user_id: anonymous.id,
                display_name: None,
            },
        )
        .await?;

    let display_for = |user_id: i32| {
        dto.members
            .iter()
            .find(|m| m.user_id == user_id)
            .and_then(|m| m.display_name.clone())
    };
    assert_eq!(display_for(named.id).as_deref(), Some("Sam Smith"));
    assert_eq!(display_for(anonymous.id).as_deref(), Some("ssmith2"));

    Ok(())
}

/// Tests that only technicians can join a roster.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_non_technician() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::maintenance_team::create_team(db).await?;
    let manager = factory::user::create_user_with_role(db, Role::Manager).await?;

    let result = TeamService::new(db)
        .add_member(
            team.id,
            AddTeamMemberDto {
                user_id: manager.id,
                display_name: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the one-membership-per-pair rule.
///
/// Expected: Err(AppError::Conflict) on the second add
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::maintenance_team::create_team(db).await?;
    let technician = factory::user::create_technician(db).await?;

    let service = TeamService::new(db);
    service
        .add_member(
            team.id,
            AddTeamMemberDto {
                user_id: technician.id,
                display_name: None,
            },
        )
        .await?;

    let result = service
        .add_member(
            team.id,
            AddTeamMemberDto {
                user_id: technician.id,
                display_name: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests adding to a missing team.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let technician = factory::user::create_technician(db).await?;

    let result = TeamService::new(db)
        .add_member(
            9999,
            AddTeamMemberDto {
                user_id: technician.id,
                display_name: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
