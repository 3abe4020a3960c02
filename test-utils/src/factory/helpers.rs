//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an asset and a tracking device linked to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((asset, device))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_linked_device(
    db: &DatabaseConnection,
) -> Result<(entity::asset::Model, entity::tracking_device::Model), DbErr> {
    let asset = crate::factory::asset::create_asset(db).await?;
    let device = crate::factory::tracking_device::TrackingDeviceFactory::new(db)
        .asset_id(&asset.id)
        .build()
        .await?;

    Ok((asset, device))
}

/// Creates an asset with a linked device and a trip for that asset.
///
/// # Returns
/// - `Ok((asset, device, trip))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::asset::Model,
        entity::tracking_device::Model,
        entity::trip::Model,
    ),
    DbErr,
> {
    let (asset, device) = create_linked_device(db).await?;
    let trip = crate::factory::trip::create_trip(db, &asset.id).await?;

    Ok((asset, device, trip))
}
