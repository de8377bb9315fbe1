//! Records exchanged with the authentication framework.
//!
//! These are the framework-facing shapes. Timestamps are `time::OffsetDateTime`
//! and serialize as RFC 3339; field names serialize in camelCase.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::convert::{from_db, from_db_opt};
use crate::entity::{account, session, user, verification_request};
use crate::error::{AdapterError, Result};

/// A local user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub email_verified: Option<OffsetDateTime>,
    pub image: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields supplied when creating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub email_verified: Option<OffsetDateTime>,
    pub image: Option<String>,
}

/// An external provider identity linked to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub provider_type: String,
    pub provider_id: String,
    pub provider_account_id: String,
    pub refresh_token: Option<String>,
    pub access_token: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub access_token_expires: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields supplied when linking a provider account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub user_id: String,
    /// e.g. `oauth` or `email`.
    pub provider_type: String,
    pub provider_id: String,
    pub provider_account_id: String,
    pub refresh_token: Option<String>,
    pub access_token: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub access_token_expires: Option<OffsetDateTime>,
}

impl NewAccount {
    /// A link without provider tokens.
    pub fn new(
        user_id: impl Into<String>,
        provider_type: impl Into<String>,
        provider_id: impl Into<String>,
        provider_account_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            provider_type: provider_type.into(),
            provider_id: provider_id.into(),
            provider_account_id: provider_account_id.into(),
            refresh_token: None,
            access_token: None,
            access_token_expires: None,
        }
    }
}

/// An authenticated session.
///
/// A session is only valid while `now <= expires`; readers in this crate
/// already filter expired rows, but a record held by the caller can still age
/// out, which [`Session::is_expired`] checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
    pub session_token: String,
    pub access_token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Session {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now > self.expires
    }
}

/// Fields supplied when creating a session. Tokens are generated by the
/// adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
}

/// A single-use verification token for an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub id: String,
    pub identifier: String,
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl VerificationRequest {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now > self.expires
    }
}

/// Fields supplied when creating a verification request. `token` may be the
/// raw token or a [`hash_token`](crate::id::hash_token) digest; the adapter
/// stores it as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVerificationRequest {
    pub identifier: String,
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
}

impl TryFrom<user::Model> for User {
    type Error = AdapterError;

    fn try_from(model: user::Model) -> Result<Self> {
        Ok(Self {
            id: model.id,
            name: model.name,
            email: model.email,
            email_verified: from_db_opt(model.email_verified)?,
            image: model.image,
            created_at: from_db(model.created_at)?,
            updated_at: from_db(model.updated_at)?,
        })
    }
}

impl TryFrom<account::Model> for Account {
    type Error = AdapterError;

    fn try_from(model: account::Model) -> Result<Self> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            provider_type: model.provider_type,
            provider_id: model.provider_id,
            provider_account_id: model.provider_account_id,
            refresh_token: model.refresh_token,
            access_token: model.access_token,
            access_token_expires: from_db_opt(model.access_token_expires)?,
            created_at: from_db(model.created_at)?,
            updated_at: from_db(model.updated_at)?,
        })
    }
}

impl TryFrom<session::Model> for Session {
    type Error = AdapterError;

    fn try_from(model: session::Model) -> Result<Self> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            expires: from_db(model.expires)?,
            session_token: model.session_token,
            access_token: model.access_token,
            created_at: from_db(model.created_at)?,
            updated_at: from_db(model.updated_at)?,
        })
    }
}

impl TryFrom<verification_request::Model> for VerificationRequest {
    type Error = AdapterError;

    fn try_from(model: verification_request::Model) -> Result<Self> {
        Ok(Self {
            id: model.id,
            identifier: model.identifier,
            token: model.token,
            expires: from_db(model.expires)?,
            created_at: from_db(model.created_at)?,
            updated_at: from_db(model.updated_at)?,
        })
    }
}
