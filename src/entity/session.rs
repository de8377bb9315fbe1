//! Session entity model for Sea-ORM database interaction.
//!
//! This module defines the database schema representation for authenticated
//! sessions. It maps to the "session" table unless the adapter's model mapping
//! renames it.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing a session in the database.
///
/// # Database Schema
///
/// | Column        | Type               | Description                       |
/// |---------------|--------------------|-----------------------------------|
/// | id            | TEXT (Primary Key) | Generated session id              |
/// | user_id       | TEXT               | Owning user                       |
/// | expires       | TIMESTAMPTZ        | Session expiration timestamp      |
/// | session_token | TEXT UNIQUE        | Token carried by the client       |
/// | access_token  | TEXT UNIQUE        | Secondary token for API access    |
/// | created_at    | TIMESTAMPTZ        | Row creation time                 |
/// | updated_at    | TIMESTAMPTZ        | Last write time                   |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    /// The generated session identifier.
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    /// The user this session authenticates.
    #[sea_orm(column_type = "Text")]
    pub user_id: String,

    /// The session expiration timestamp.
    ///
    /// The adapter uses this field to:
    /// 1. Filter out expired sessions when loading
    /// 2. Delete expired sessions during cleanup
    pub expires: DateTimeWithTimeZone,

    #[sea_orm(unique)]
    pub session_token: String,

    #[sea_orm(unique)]
    pub access_token: String,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
