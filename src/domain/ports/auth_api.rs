//! Auth API port.

use async_trait::async_trait;

use crate::domain::errors::ApiResult;
use crate::domain::models::{AuthResponse, Credentials, User};

/// The authentication endpoints of the listings service.
///
/// Session state (token persistence, 401 handling, role checks) is the
/// responsibility of [`crate::services::SessionStore`]; this port only
/// moves bytes.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token pair and user snapshot.
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse>;

    /// Notify the server that the session is over.
    async fn logout(&self, token: &str) -> ApiResult<()>;

    /// Fetch the user belonging to `token`. Returns
    /// [`crate::domain::errors::ApiError::AuthenticationRequired`] when
    /// the token is invalid or expired.
    async fn current_user(&self, token: &str) -> ApiResult<User>;
}
