//! Client-side session handle.

use std::fmt;
use std::sync::{Arc, RwLock};

/// Shared handle to the current bearer token.
///
/// Cloning the handle shares the underlying state. Anything outside the
/// [`crate::auth`] module can only read it; the token is set and cleared by
/// [`crate::auth::AuthService`].
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create an empty (anonymous) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bearer token, if the user is logged in.
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub(super) fn set_token(&self, token: String) {
        match self.token.write() {
            Ok(mut guard) => *guard = Some(token),
            Err(poisoned) => *poisoned.into_inner() = Some(token),
        }
    }

    pub(super) fn clear(&self) {
        match self.token.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("is_authenticated", &self.is_authenticated())
            .finish()
    }
}
