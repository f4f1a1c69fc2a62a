use super::*;

/// Tests listing a user's team ids across multiple teams.
///
/// Expected: Ok with both team ids
#[tokio::test]
async fn lists_all_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_technician(db).await?;
    let first = factory::maintenance_team::create_team(db).await?;
    let second = factory::maintenance_team::create_team(db).await?;
    factory::team_member::create_member(db, first.id, user.id).await?;
    factory::team_member::create_member(db, second.id, user.id).await?;

    let repo = TeamMembershipRepository::new(db);
    let mut team_ids = repo.team_ids_for_user(user.id).await?;
    team_ids.sort();

    assert_eq!(team_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a user with no memberships.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_for_user_without_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_technician(db).await?;

    let repo = TeamMembershipRepository::new(db);

    assert!(repo.team_ids_for_user(user.id).await?.is_empty());

    Ok(())
}
