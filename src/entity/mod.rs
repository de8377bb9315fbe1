//! Database entity models for seaorm-auth-adapter.
//!
//! These are the Sea-ORM entity definitions for the four fixed tables the
//! adapter stores: users, linked provider accounts, sessions and verification
//! requests. The `table_name` on each entity is only the default physical name;
//! [`SeaOrmAdapter`](crate::SeaOrmAdapter) resolves the real table through the
//! configured [`ModelMapping`](crate::ModelMapping) and uses the entities for
//! their column sets and row decoding.
//!
//! Accounts and sessions point at their user through `user_id`; the foreign
//! keys are declared by [`schema`](crate::schema). Verification requests are
//! keyed by identifier and are not tied to users.

/// Linked OAuth provider identities.
pub mod account;

/// Authenticated sessions.
pub mod session;

/// Local users.
pub mod user;

/// Single-use email verification tokens.
pub mod verification_request;
