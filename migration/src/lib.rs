pub use sea_orm_migration::prelude::*;

mod m20250621_000001_create_role_table;
mod m20250621_000002_create_user_table;
mod m20250621_000003_create_customer_table;
mod m20250621_000004_create_car_table;
mod m20250621_000005_create_order_table;
mod m20250621_000006_create_location_table;
mod m20250621_000007_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250621_000001_create_role_table::Migration),
            Box::new(m20250621_000002_create_user_table::Migration),
            Box::new(m20250621_000003_create_customer_table::Migration),
            Box::new(m20250621_000004_create_car_table::Migration),
            Box::new(m20250621_000005_create_order_table::Migration),
            Box::new(m20250621_000006_create_location_table::Migration),
            Box::new(m20250621_000007_create_message_table::Migration),
        ]
    }
}
