//! Adapter configuration: physical table names, schema variant and session
//! lifetime policy.
//!
//! Everything here is fixed once the adapter is built. Renaming only changes
//! where rows live; the columns, types and unique indexes of each table stay
//! the same.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::{AdapterError, Result};

/// Maps the four logical entities to physical table names.
///
/// Defaults to the lowercased entity names. Several logical schemas can share
/// one database by giving each adapter its own mapping.
///
/// ```
/// use seaorm_auth_adapter::ModelMapping;
///
/// let mapping = ModelMapping::prefixed("tenant_a_").with_user_table("tenant_a_members");
/// assert_eq!(mapping.user, "tenant_a_members");
/// assert_eq!(mapping.session, "tenant_a_session");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelMapping {
    pub user: String,
    pub account: String,
    pub session: String,
    pub verification_request: String,
}

impl Default for ModelMapping {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            account: "account".to_string(),
            session: "session".to_string(),
            verification_request: "verification_request".to_string(),
        }
    }
}

impl ModelMapping {
    /// Default table names, each prefixed with `prefix`.
    pub fn prefixed(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            user: format!("{prefix}{}", defaults.user),
            account: format!("{prefix}{}", defaults.account),
            session: format!("{prefix}{}", defaults.session),
            verification_request: format!("{prefix}{}", defaults.verification_request),
        }
    }

    pub fn with_user_table(mut self, name: impl Into<String>) -> Self {
        self.user = name.into();
        self
    }

    pub fn with_account_table(mut self, name: impl Into<String>) -> Self {
        self.account = name.into();
        self
    }

    pub fn with_session_table(mut self, name: impl Into<String>) -> Self {
        self.session = name.into();
        self
    }

    pub fn with_verification_request_table(mut self, name: impl Into<String>) -> Self {
        self.verification_request = name.into();
        self
    }

    /// Checks that every table name is non-empty and that no two entities
    /// share a table.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("user", &self.user),
            ("account", &self.account),
            ("session", &self.session),
            ("verification_request", &self.verification_request),
        ];

        let mut seen = HashSet::new();
        for (entity, name) in names {
            if name.trim().is_empty() {
                return Err(AdapterError::InvalidConfig(format!(
                    "table name for {entity} is empty"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(AdapterError::InvalidConfig(format!(
                    "table name `{name}` is mapped to more than one entity"
                )));
            }
        }

        Ok(())
    }
}

/// Which historical schema shape the tables use.
///
/// Both variants expose the same operations, and ids always cross the adapter
/// boundary as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// Text primary keys generated by the adapter (UUID v4).
    #[default]
    Current,
    /// Integer auto-increment primary keys assigned by the database.
    Legacy,
}

impl SchemaVariant {
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

/// Session lifetime settings applied by `update_session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    /// How long a refreshed session stays valid.
    pub max_age: Duration,
    /// Minimum time between two expiry refresh writes for the same session.
    pub update_age: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            max_age: Duration::days(30),
            update_age: Duration::hours(24),
        }
    }
}
