pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_role_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_token_table;
mod m20260105_000004_create_deployment_id_table;
mod m20260106_000005_create_asset_table;
mod m20260106_000006_create_location_table;
mod m20260106_000007_create_tracking_device_table;
mod m20260107_000008_create_trip_table;
mod m20260107_000009_create_trip_leg_table;
mod m20260107_000010_create_tracking_point_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_role_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_token_table::Migration),
            Box::new(m20260105_000004_create_deployment_id_table::Migration),
            Box::new(m20260106_000005_create_asset_table::Migration),
            Box::new(m20260106_000006_create_location_table::Migration),
            Box::new(m20260106_000007_create_tracking_device_table::Migration),
            Box::new(m20260107_000008_create_trip_table::Migration),
            Box::new(m20260107_000009_create_trip_leg_table::Migration),
            Box::new(m20260107_000010_create_tracking_point_table::Migration),
        ]
    }
}
