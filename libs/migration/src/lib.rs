pub use sea_orm_migration::prelude::*;

mod m20250110_000000_create_categories;
mod m20250110_000001_create_products;
mod m20250112_000000_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000000_create_categories::Migration),
            Box::new(m20250110_000001_create_products::Migration),
            Box::new(m20250112_000000_seed_categories::Migration),
        ]
    }
}
