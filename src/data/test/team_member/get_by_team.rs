use super::*;

/// Tests fetching a roster with joined user accounts.
///
/// Expected: Ok with each member paired with their user
#[tokio::test]
async fn joins_member_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::maintenance_team::create_team(db).await?;
    let alice = factory::user::create_technician(db).await?;
    let bob = factory::user::create_technician(db).await?;
    factory::team_member::create_member_named(db, team.id, alice.id, Some("Ally".to_string()))
        .await?;
    factory::team_member::create_member(db, team.id, bob.id).await?;

    let repo = TeamMembershipRepository::new(db);
    let roster = repo.get_by_team(team.id).await?;

    assert_eq!(roster.len(), 2);
    for (member, user) in &roster {
        let user = user.as_ref().expect("joined user");
        assert_eq!(member.user_id, user.id);
    }

    let named = roster
        .iter()
        .find(|(member, _)| member.user_id == alice.id)
        .unwrap();
    assert_eq!(named.0.display_name.as_deref(), Some("Ally"));

    Ok(())
}

/// Tests that other teams' rosters are not included.
///
/// Expected: Ok with only the requested team's members
#[tokio::test]
async fn scopes_to_one_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::maintenance_team::create_team(db).await?;
    let other = factory::maintenance_team::create_team(db).await?;
    let user = factory::user::create_technician(db).await?;
    factory::team_member::create_member(db, other.id, user.id).await?;

    let repo = TeamMembershipRepository::new(db);

    assert!(repo.get_by_team(team.id).await?.is_empty());

    Ok(())
}
