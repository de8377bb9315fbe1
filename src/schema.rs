//! DDL for the four auth tables.
//!
//! The statements are generated from a [`ModelMapping`] and a
//! [`SchemaVariant`], so renamed and legacy schemas get exactly the same
//! columns, foreign keys and unique indexes as the default one. Uniqueness is
//! always enforced by the database:
//!
//! | Table                | Unique                                 |
//! |----------------------|----------------------------------------|
//! | user                 | `email`                                |
//! | account              | (`provider_id`, `provider_account_id`) |
//! | session              | `session_token`, `access_token`        |
//! | verification_request | `token`, (`identifier`, `token`)       |

use sea_orm::sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, ForeignKeyCreateStatement, Index,
    IndexCreateStatement, IntoIden, Table, TableCreateStatement, TableDropStatement,
};
use sea_orm::ConnectionTrait;

use crate::config::{ModelMapping, SchemaVariant};
use crate::entity::{account, session, user, verification_request};
use crate::error::Result;
use crate::query::{execute, table};

fn id_column<C: IntoIden>(column: C, variant: SchemaVariant) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    match variant {
        SchemaVariant::Current => def.string().not_null().primary_key(),
        SchemaVariant::Legacy => def.integer().not_null().auto_increment().primary_key(),
    };
    def
}

fn user_id_column<C: IntoIden>(column: C, variant: SchemaVariant) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    match variant {
        SchemaVariant::Current => def.string().not_null(),
        SchemaVariant::Legacy => def.integer().not_null(),
    };
    def
}

fn timestamp_column<C: IntoIden>(column: C) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    def.timestamp_with_time_zone().not_null();
    def
}

fn user_foreign_key<C: IntoIden>(
    mapping: &ModelMapping,
    from_table: &str,
    column: C,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(format!("fk_{from_table}_user_id"))
        .from(table(from_table), column)
        .to(table(&mapping.user), user::Column::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

/// `CREATE TABLE IF NOT EXISTS` statements, parents first.
pub fn table_statements(
    mapping: &ModelMapping,
    variant: SchemaVariant,
) -> Vec<TableCreateStatement> {
    let users = Table::create()
        .table(table(&mapping.user))
        .if_not_exists()
        .col(&mut id_column(user::Column::Id, variant))
        .col(ColumnDef::new(user::Column::Name).string())
        .col(ColumnDef::new(user::Column::Email).string().unique_key())
        .col(ColumnDef::new(user::Column::EmailVerified).timestamp_with_time_zone())
        .col(ColumnDef::new(user::Column::Image).text())
        .col(&mut timestamp_column(user::Column::CreatedAt))
        .col(&mut timestamp_column(user::Column::UpdatedAt))
        .to_owned();

    let accounts = Table::create()
        .table(table(&mapping.account))
        .if_not_exists()
        .col(&mut id_column(account::Column::Id, variant))
        .col(&mut user_id_column(account::Column::UserId, variant))
        .col(ColumnDef::new(account::Column::ProviderType).string().not_null())
        .col(ColumnDef::new(account::Column::ProviderId).string().not_null())
        .col(ColumnDef::new(account::Column::ProviderAccountId).string().not_null())
        .col(ColumnDef::new(account::Column::RefreshToken).text())
        .col(ColumnDef::new(account::Column::AccessToken).text())
        .col(ColumnDef::new(account::Column::AccessTokenExpires).timestamp_with_time_zone())
        .col(&mut timestamp_column(account::Column::CreatedAt))
        .col(&mut timestamp_column(account::Column::UpdatedAt))
        .foreign_key(&mut user_foreign_key(
            mapping,
            &mapping.account,
            account::Column::UserId,
        ))
        .to_owned();

    let sessions = Table::create()
        .table(table(&mapping.session))
        .if_not_exists()
        .col(&mut id_column(session::Column::Id, variant))
        .col(&mut user_id_column(session::Column::UserId, variant))
        .col(&mut timestamp_column(session::Column::Expires))
        .col(
            ColumnDef::new(session::Column::SessionToken)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(session::Column::AccessToken)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(&mut timestamp_column(session::Column::CreatedAt))
        .col(&mut timestamp_column(session::Column::UpdatedAt))
        .foreign_key(&mut user_foreign_key(
            mapping,
            &mapping.session,
            session::Column::UserId,
        ))
        .to_owned();

    let verification_requests = Table::create()
        .table(table(&mapping.verification_request))
        .if_not_exists()
        .col(&mut id_column(verification_request::Column::Id, variant))
        .col(
            ColumnDef::new(verification_request::Column::Identifier)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(verification_request::Column::Token)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(&mut timestamp_column(verification_request::Column::Expires))
        .col(&mut timestamp_column(verification_request::Column::CreatedAt))
        .col(&mut timestamp_column(verification_request::Column::UpdatedAt))
        .to_owned();

    vec![users, accounts, sessions, verification_requests]
}

/// `CREATE INDEX IF NOT EXISTS` statements. Index names are derived from the
/// mapped table names so several mappings can share one database.
pub fn index_statements(mapping: &ModelMapping) -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name(format!("idx_{}_provider_account", mapping.account))
            .table(table(&mapping.account))
            .col(account::Column::ProviderId)
            .col(account::Column::ProviderAccountId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name(format!("idx_{}_user_id", mapping.account))
            .table(table(&mapping.account))
            .col(account::Column::UserId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name(format!("idx_{}_user_id", mapping.session))
            .table(table(&mapping.session))
            .col(session::Column::UserId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name(format!("idx_{}_expires", mapping.session))
            .table(table(&mapping.session))
            .col(session::Column::Expires)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name(format!("idx_{}_identifier_token", mapping.verification_request))
            .table(table(&mapping.verification_request))
            .col(verification_request::Column::Identifier)
            .col(verification_request::Column::Token)
            .unique()
            .if_not_exists()
            .to_owned(),
    ]
}

/// `DROP TABLE IF EXISTS` statements, children first.
pub fn drop_statements(mapping: &ModelMapping) -> Vec<TableDropStatement> {
    [
        &mapping.verification_request,
        &mapping.session,
        &mapping.account,
        &mapping.user,
    ]
    .into_iter()
    .map(|name| Table::drop().table(table(name)).if_exists().to_owned())
    .collect()
}

/// Creates every table and index that does not exist yet.
pub async fn create_schema<C>(
    conn: &C,
    mapping: &ModelMapping,
    variant: SchemaVariant,
) -> Result<()>
where
    C: ConnectionTrait,
{
    for stmt in table_statements(mapping, variant) {
        execute(conn, &stmt).await?;
    }
    for stmt in index_statements(mapping) {
        execute(conn, &stmt).await?;
    }
    Ok(())
}
