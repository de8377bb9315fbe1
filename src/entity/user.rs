//! User entity model.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing a local user.
///
/// # Database Schema
///
/// | Column         | Type               | Description                          |
/// |----------------|--------------------|--------------------------------------|
/// | id             | TEXT (Primary Key) | Generated user id                    |
/// | name           | TEXT NULL          | Display name                         |
/// | email          | TEXT NULL UNIQUE   | Email address, unique when present   |
/// | email_verified | TIMESTAMPTZ NULL   | When the email address was confirmed |
/// | image          | TEXT NULL          | Avatar URL                           |
/// | created_at     | TIMESTAMPTZ        | Row creation time                    |
/// | updated_at     | TIMESTAMPTZ        | Last write time                      |
///
/// Under [`SchemaVariant::Legacy`](crate::SchemaVariant::Legacy) the `id`
/// column is an auto-increment integer and is read back as text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub name: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub email_verified: Option<DateTimeWithTimeZone>,
    pub image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
