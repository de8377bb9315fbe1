//! `sea-orm-migration` support for the default table names.
//!
//! Applications with a custom [`ModelMapping`](crate::ModelMapping) create
//! their tables with [`SeaOrmAdapter::create_schema`](crate::SeaOrmAdapter::create_schema)
//! instead.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_auth_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("seaorm_auth_adapter_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_auth_tables::Migration)]
    }
}
