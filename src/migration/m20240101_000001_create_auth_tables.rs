use sea_orm_migration::prelude::*;

use crate::config::{ModelMapping, SchemaVariant};
use crate::schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mapping = ModelMapping::default();

        // Parents before children so the foreign keys resolve
        for table in schema::table_statements(&mapping, SchemaVariant::Current) {
            manager.create_table(table).await?;
        }
        for index in schema::index_statements(&mapping) {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in schema::drop_statements(&ModelMapping::default()) {
            manager.drop_table(table).await?;
        }

        Ok(())
    }
}
