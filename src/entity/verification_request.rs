//! Verification request entity model.

use sea_orm::entity::prelude::*;

/// A single-use token proving control of an identifier (usually an email
/// address). Rows are keyed by the unique pair (`identifier`, `token`); the
/// token alone is unique as well.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "verification_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub identifier: String,
    #[sea_orm(unique)]
    pub token: String,
    pub expires: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
