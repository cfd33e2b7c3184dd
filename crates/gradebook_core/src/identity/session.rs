//! In-process session identity provider.
//!
//! # Responsibility
//! - Hold at most one established session and expose sign-in, sign-out and
//!   display-name update operations.
//!
//! # Invariants
//! - A session always carries a non-blank account id.
//! - Display-name updates require an established session and a non-blank
//!   value.

use crate::identity::provider::{AccountProfile, IdentityProvider};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Account identifier is empty or whitespace-only.
    EmptyAccountId,
    /// Display name update with an empty or whitespace-only value.
    EmptyDisplayName,
    /// Operation requires an established session.
    NotSignedIn,
}

impl Display for IdentityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAccountId => write!(f, "account id must not be empty"),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::NotSignedIn => write!(f, "no session is currently established"),
        }
    }
}

impl Error for IdentityError {}

/// Single-session identity provider backed by in-process state.
///
/// Hosts wire their auth collaborator into this shape once a session is
/// established; tests drive it directly.
#[derive(Debug, Default)]
pub struct SessionIdentityProvider {
    session: Option<AccountProfile>,
}

impl SessionIdentityProvider {
    /// Creates a provider with no established session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes a session for one account.
    ///
    /// A blank display name is kept as-is; record labeling falls back via
    /// `AccountProfile::display_label`.
    ///
    /// # Errors
    /// - `EmptyAccountId` when the identifier is blank.
    pub fn sign_in(
        &mut self,
        account_id: &str,
        display_name: &str,
        email: Option<&str>,
    ) -> Result<AccountProfile, IdentityError> {
        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(IdentityError::EmptyAccountId);
        }

        let profile = AccountProfile {
            account_id: account_id.to_string(),
            display_name: display_name.trim().to_string(),
            email: email
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        };
        self.session = Some(profile.clone());
        Ok(profile)
    }

    /// Clears the established session, if any.
    pub fn sign_out(&mut self) {
        self.session = None;
    }

    /// Replaces the display name on the established session.
    ///
    /// # Errors
    /// - `NotSignedIn` without an established session.
    /// - `EmptyDisplayName` when the new value is blank.
    pub fn update_display_name(
        &mut self,
        display_name: &str,
    ) -> Result<AccountProfile, IdentityError> {
        let trimmed = display_name.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::EmptyDisplayName);
        }

        let session = self.session.as_mut().ok_or(IdentityError::NotSignedIn)?;
        session.display_name = trimmed.to_string();
        Ok(session.clone())
    }
}

impl IdentityProvider for SessionIdentityProvider {
    fn current_profile(&self) -> Option<AccountProfile> {
        self.session.clone()
    }
}
