//! Auth session store.
//!
//! Owns the token lifecycle: `Unauthenticated -> Authenticating ->
//! Authenticated -> Unauthenticated` (on logout or 401). Session state
//! lives in durable storage under fixed keys and is mirrored in memory;
//! both are written together and cleared together.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{Credentials, Role, User};
use crate::domain::ports::{AuthApi, TokenStorage, KEY_REFRESH_TOKEN, KEY_TOKEN, KEY_USER};
use crate::domain::validation::validate_credentials;

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Unauthenticated,
    /// A login request is in flight; the prior state is restored if it
    /// fails.
    Authenticating,
    Authenticated(User),
}

/// Process-wide session state consumed by anything that needs auth.
///
/// Components receive this store explicitly (constructor injection)
/// instead of reaching for ambient global state.
pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn TokenStorage>,
    state: Mutex<AuthState>,
}

impl SessionStore {
    /// Build a store, restoring an authenticated session from storage
    /// when a token and a parseable user snapshot are both present.
    pub fn new(api: Arc<dyn AuthApi>, storage: Arc<dyn TokenStorage>) -> Self {
        let restored = Self::restore(storage.as_ref());
        Self {
            api,
            storage,
            state: Mutex::new(restored),
        }
    }

    fn restore(storage: &dyn TokenStorage) -> AuthState {
        let token = storage.get(KEY_TOKEN).ok().flatten();
        let user = storage
            .get(KEY_USER)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        match (token, user) {
            (Some(_), Some(user)) => AuthState::Authenticated(user),
            _ => AuthState::Unauthenticated,
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token, refresh token, and user snapshot are
    /// persisted in one durable step. On any failure the prior state is
    /// left untouched and the error is surfaced.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        validate_credentials(credentials)?;

        let prior = {
            let mut state = self.state.lock().expect("session lock poisoned");
            let prior = state.clone();
            *state = AuthState::Authenticating;
            prior
        };

        let outcome = async {
            let response = self.api.login(credentials).await?;
            let user_json = serde_json::to_string(&response.user)?;
            self.storage.set_many(&[
                (KEY_TOKEN, response.token.as_str()),
                (KEY_REFRESH_TOKEN, response.refresh_token.as_str()),
                (KEY_USER, user_json.as_str()),
            ])?;
            Ok(response.user)
        }
        .await;

        let mut state = self.state.lock().expect("session lock poisoned");
        match outcome {
            Ok(user) => {
                info!(email = %user.email, "login succeeded");
                *state = AuthState::Authenticated(user.clone());
                Ok(user)
            }
            Err(error) => {
                *state = prior;
                Err(error)
            }
        }
    }

    /// Fetch the current user.
    ///
    /// Without a stored token this reports unauthenticated immediately,
    /// with no network call. A 401 response means the token is invalid or
    /// expired: all session state is cleared locally and `Ok(None)` is
    /// returned rather than surfacing the error.
    pub async fn current_user(&self) -> ApiResult<Option<User>> {
        let Some(token) = self.storage.get(KEY_TOKEN)? else {
            *self.state.lock().expect("session lock poisoned") = AuthState::Unauthenticated;
            return Ok(None);
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                let user_json = serde_json::to_string(&user)?;
                self.storage.set(KEY_USER, &user_json)?;
                *self.state.lock().expect("session lock poisoned") =
                    AuthState::Authenticated(user.clone());
                Ok(Some(user))
            }
            Err(ApiError::AuthenticationRequired) => {
                warn!("stored token rejected, clearing session");
                self.clear_local()?;
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// End the session: notify the server on a best-effort basis, then
    /// clear local state unconditionally.
    pub async fn logout(&self) -> ApiResult<()> {
        if let Some(token) = self.storage.get(KEY_TOKEN)? {
            if let Err(error) = self.api.logout(&token).await {
                warn!(%error, "logout notification failed, clearing local session anyway");
            }
        }
        self.clear_local()
    }

    /// True iff the stored user's role equals `required`, or the stored
    /// user is an admin.
    pub fn has_role(&self, required: Role) -> bool {
        let from_state = match &*self.state.lock().expect("session lock poisoned") {
            AuthState::Authenticated(user) => Some(user.role),
            _ => None,
        };
        let role = from_state.or_else(|| {
            self.storage
                .get(KEY_USER)
                .ok()
                .flatten()
                .and_then(|raw| serde_json::from_str::<User>(&raw).ok())
                .map(|user| user.role)
        });
        matches!(role, Some(r) if r == required || r == Role::Admin)
    }

    /// Token presence implies an authenticated session.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.storage.get(KEY_TOKEN), Ok(Some(_)))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AuthState {
        self.state.lock().expect("session lock poisoned").clone()
    }

    fn clear_local(&self) -> ApiResult<()> {
        self.storage
            .remove_many(&[KEY_TOKEN, KEY_REFRESH_TOKEN, KEY_USER])?;
        *self.state.lock().expect("session lock poisoned") = AuthState::Unauthenticated;
        Ok(())
    }
}
