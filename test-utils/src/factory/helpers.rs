//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a technician, a team the technician belongs to, and a unit of
/// equipment wired to both.
///
/// This is the standard starting point for workflow tests:
/// 1. User with the TECHNICIAN role
/// 2. Maintenance team
/// 3. Team membership linking the two
/// 4. Equipment with the team as maintenance team and the technician as
///    default technician
///
/// Use the individual factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((technician, team, equipment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_equipment_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::maintenance_team::Model,
        entity::equipment::Model,
    ),
    DbErr,
> {
    let technician = crate::factory::user::UserFactory::new(db)
        .role(entity::user::Role::Technician)
        .build()
        .await?;
    let team = crate::factory::maintenance_team::create_team(db).await?;
    crate::factory::team_member::create_member(db, team.id, technician.id).await?;
    let equipment = crate::factory::equipment::EquipmentFactory::new(db)
        .maintenance_team_id(team.id)
        .default_technician_id(technician.id)
        .build()
        .await?;

    Ok((technician, team, equipment))
}
