//! Session and authentication state.
//!
//! [`AuthService`] owns the [`Session`] and its lifecycle: it is created empty,
//! rehydrated from the [`TokenStore`] at startup, filled in on login, and
//! cleared on logout or when the backend rejects the token.
//!
//! Login is split into [`AuthService::begin_login`] and
//! [`AuthService::finish_login`] so the UI loop can run the credential exchange
//! in the background; [`AuthService::login`] composes both for callers that
//! can simply await.

pub mod session;
pub mod token_store;

use std::sync::Arc;

use log::{info, warn};

use crate::backend::{ApiError, Backend};
use crate::constants::{ERROR_EMPTY_CREDENTIALS, ERROR_LOGIN_FAILED, ERROR_SESSION_EXPIRED};

pub use session::Session;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    /// A login request is in flight.
    Authenticating,
    Authenticated,
}

pub struct AuthService {
    backend: Arc<dyn Backend>,
    session: Session,
    store: Box<dyn TokenStore>,
    state: AuthState,
    error: Option<String>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn Backend>, session: Session, store: Box<dyn TokenStore>) -> Self {
        Self {
            backend,
            session,
            store,
            state: AuthState::Anonymous,
            error: None,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn is_authenticating(&self) -> bool {
        self.state == AuthState::Authenticating
    }

    /// Last login/session error, meant for display.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    /// Restore a token saved by an earlier run.
    ///
    /// The token is trusted as-is; an expired token is only discovered when a
    /// protected request is rejected. Returns whether the session is now authenticated.
    pub fn rehydrate(&mut self) -> bool {
        match self.store.load() {
            Ok(Some(token)) => {
                self.session.set_token(token);
                self.state = AuthState::Authenticated;
                info!("Restored saved session");
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Could not restore saved session: {e:#}");
                false
            }
        }
    }

    /// Validate credentials locally and move to [`AuthState::Authenticating`].
    pub fn begin_login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        self.error = None;
        if username.trim().is_empty() || password.is_empty() {
            self.error = Some(ERROR_EMPTY_CREDENTIALS.to_string());
            return Err(ApiError::Validation(ERROR_EMPTY_CREDENTIALS.to_string()));
        }

        self.state = AuthState::Authenticating;
        Ok(())
    }

    /// Apply the outcome of a credential exchange.
    pub fn finish_login(&mut self, result: Result<String, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(token) => {
                if let Err(e) = self.store.save(&token) {
                    // Still usable for this run
                    warn!("Failed to persist session token: {e:#}");
                }
                self.session.set_token(token);
                self.state = AuthState::Authenticated;
                self.error = None;
                info!("Logged in");
                Ok(())
            }
            Err(e) => {
                warn!("Login failed: {e}");
                self.state = AuthState::Anonymous;
                self.error = Some(e.user_message(ERROR_LOGIN_FAILED));
                Err(e)
            }
        }
    }

    /// Exchange credentials for a token and persist it.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        self.begin_login(username, password)?;
        let result = self.backend.request_token(username.trim(), password).await;
        self.finish_login(result)
    }

    /// Forget the token locally. Works without network access.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to remove saved session: {e:#}");
        }
        self.session.clear();
        self.state = AuthState::Anonymous;
        self.error = None;
        info!("Logged out");
    }

    /// Drop a token the backend no longer accepts.
    pub fn invalidate(&mut self) {
        self.logout();
        self.error = Some(ERROR_SESSION_EXPIRED.to_string());
    }
}
