use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    Account, NewAccount, NewSession, NewUser, NewVerificationRequest, Session, User,
    VerificationRequest,
};

/// Storage operations an authentication framework needs.
///
/// Implementations must enforce the uniqueness rules in the storage engine
/// itself, so concurrent callers racing to create the same entity see exactly
/// one success and [`AdapterError::ConstraintViolation`] for everyone else.
///
/// Reads return `Ok(None)` for missing entities. Sessions and verification
/// requests past their `expires` are reported as missing even while their rows
/// still exist.
///
/// [`AdapterError::ConstraintViolation`]: crate::AdapterError::ConstraintViolation
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Creates a user with a generated id. Fails with `ConstraintViolation`
    /// when the email is already in use.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Resolves the user owning the account linked under the given provider
    /// identity.
    async fn get_user_by_provider_account_id(
        &self,
        provider_id: &str,
        provider_account_id: &str,
    ) -> Result<Option<User>>;

    /// Writes `name`, `email`, `email_verified` and `image` of `user` and
    /// refreshes `updated_at`. Fails with `NotFound` when the id does not
    /// exist.
    async fn update_user(&self, user: User) -> Result<User>;

    /// Deletes the user together with its accounts and sessions. Fails with
    /// `NotFound` when the id does not exist.
    async fn delete_user(&self, id: &str) -> Result<()>;

    /// Links a provider identity to a user. Fails with `ConstraintViolation`
    /// when the identity is already linked to any user.
    async fn link_account(&self, account: NewAccount) -> Result<Account>;

    /// Fails with `NotFound` when no account matches.
    async fn unlink_account(&self, provider_id: &str, provider_account_id: &str) -> Result<()>;

    async fn get_account(
        &self,
        provider_id: &str,
        provider_account_id: &str,
    ) -> Result<Option<Account>>;

    /// Creates a session with freshly generated session and access tokens.
    async fn create_session(&self, session: NewSession) -> Result<Session>;

    async fn get_session(&self, session_token: &str) -> Result<Option<Session>>;

    /// Looks up an unexpired session and its user.
    async fn get_session_and_user(&self, session_token: &str) -> Result<Option<(Session, User)>>;

    /// Extends the session's expiry. Without `force`, a session refreshed
    /// recently is returned unchanged. Fails with `NotFound` when the id does
    /// not exist.
    async fn update_session(&self, session: Session, force: bool) -> Result<Session>;

    /// Idempotent.
    async fn delete_session(&self, session_token: &str) -> Result<()>;

    /// Fails with `ConstraintViolation` when the token (or the identifier and
    /// token pair) is already stored.
    async fn create_verification_request(
        &self,
        request: NewVerificationRequest,
    ) -> Result<VerificationRequest>;

    async fn get_verification_request(
        &self,
        identifier: &str,
        token: &str,
    ) -> Result<Option<VerificationRequest>>;

    /// Idempotent.
    async fn delete_verification_request(&self, identifier: &str, token: &str) -> Result<()>;

    /// Reads and deletes an unexpired verification request as one unit.
    ///
    /// Of several concurrent callers presenting the same token, only the one
    /// whose delete removed the row gets `Some`.
    async fn use_verification_request(
        &self,
        identifier: &str,
        token: &str,
    ) -> Result<Option<VerificationRequest>>;
}

/// Bulk removal of rows whose `expires` has passed.
///
/// Expired rows are already invisible to [`Adapter`] reads; this only
/// reclaims space. Call it periodically from the host.
#[async_trait]
pub trait ExpiredDeletion: Send + Sync {
    /// Returns the number of sessions removed.
    async fn delete_expired_sessions(&self) -> Result<u64>;

    /// Returns the number of verification requests removed.
    async fn delete_expired_verification_requests(&self) -> Result<u64>;
}
