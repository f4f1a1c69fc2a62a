use super::*;

use crate::model::request::CalendarQuery;
use chrono::{Duration, Utc};

/// Tests the calendar window and type filter.
///
/// Expected: Ok with only preventive requests scheduled inside the window
#[tokio::test]
async fn windows_preventive_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let today = Utc::now().date_naive();

    let inside = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .request_type(RequestType::Preventive)
        .scheduled_date(today + Duration::days(3))
        .build()
        .await?;
    // Outside the window.
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .request_type(RequestType::Preventive)
        .scheduled_date(today + Duration::days(30))
        .build()
        .await?;
    // Corrective, never on the calendar.
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .scheduled_date(today + Duration::days(3))
        .build()
        .await?;

    let admin = factory::user::create_user_with_role(db, Role::Admin).await?;

    let events = RequestService::new(db)
        .preventive_calendar(
            &CalendarQuery {
                start_date: Some(today),
                end_date: Some(today + Duration::days(7)),
            },
            &admin,
        )
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, inside.id);
    assert_eq!(events[0].equipment_name.as_deref(), Some(equipment.name.as_str()));
    assert!(!events[0].is_overdue);

    Ok(())
}

/// Tests the calendar with no window bounds.
///
/// Expected: Ok with every scheduled preventive request
#[tokio::test]
async fn open_window_lists_everything_scheduled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let today = Utc::now().date_naive();

    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .request_type(RequestType::Preventive)
        .scheduled_date(today + Duration::days(3))
        .build()
        .await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .request_type(RequestType::Preventive)
        .scheduled_date(today + Duration::days(30))
        .build()
        .await?;

    let admin = factory::user::create_user_with_role(db, Role::Admin).await?;

    let events = RequestService::new(db)
        .preventive_calendar(&CalendarQuery::default(), &admin)
        .await?;

    assert_eq!(events.len(), 2);

    Ok(())
}

/// Tests an inverted window.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_inverted_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, Role::Admin).await?;
    let today = Utc::now().date_naive();

    let result = RequestService::new(db)
        .preventive_calendar(
            &CalendarQuery {
                start_date: Some(today),
                end_date: Some(today - Duration::days(1)),
            },
            &admin,
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the technician scope on the calendar.
///
/// Expected: Ok with only the technician's team's events
#[tokio::test]
async fn technician_calendar_is_team_scoped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (technician, team, equipment) = factory::helpers::create_equipment_dependencies(db).await?;
    let other_team = factory::maintenance_team::create_team(db).await?;
    let today = Utc::now().date_naive();

    let mine = factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .request_type(RequestType::Preventive)
        .scheduled_date(today + Duration::days(1))
        .auto_filled_team_id(team.id)
        .build()
        .await?;
    factory::maintenance_request::RequestFactory::new(db, equipment.id)
        .request_type(RequestType::Preventive)
        .scheduled_date(today + Duration::days(1))
        .auto_filled_team_id(other_team.id)
        .build()
        .await?;

    let events = RequestService::new(db)
        .preventive_calendar(
            &CalendarQuery {
                start_date: Some(today),
                end_date: Some(today + Duration::days(7)),
            },
            &technician,
        )
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, mine.id);

    Ok(())
}
