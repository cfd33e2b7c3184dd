//! Identity provider contract consumed by record operations.
//!
//! # Responsibility
//! - Expose the single question the core asks: who is signed in right now.
//!
//! # Invariants
//! - `current_profile` returning `None` must fail record operations fast,
//!   before any storage call.

/// Profile metadata for one established session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    /// Stable unique account identifier supplied by the provider.
    pub account_id: String,
    /// Display name as configured on the account. May be blank.
    pub display_name: String,
    /// Account email, when the provider exposes one.
    pub email: Option<String>,
}

impl AccountProfile {
    /// Returns the name to stamp on saved records.
    ///
    /// Falls back from display name to email to a fixed placeholder, matching
    /// the host application's labeling rules.
    pub fn display_label(&self) -> &str {
        let trimmed = self.display_name.trim();
        if !trimmed.is_empty() {
            return trimmed;
        }
        match self.email.as_deref() {
            Some(email) if !email.trim().is_empty() => email,
            _ => "Unknown",
        }
    }
}

/// Narrow identity interface required by the record service.
///
/// Sign-in/sign-out/profile-update flows are owned by concrete providers;
/// the core only consumes the current session.
pub trait IdentityProvider {
    /// Returns the established session profile, or `None` when signed out.
    fn current_profile(&self) -> Option<AccountProfile>;
}

#[cfg(test)]
mod tests {
    use super::AccountProfile;

    #[test]
    fn display_label_prefers_name_then_email_then_placeholder() {
        let named = AccountProfile {
            account_id: "acct-1".to_string(),
            display_name: "  Ada Lovelace  ".to_string(),
            email: Some("ada@example.com".to_string()),
        };
        assert_eq!(named.display_label(), "Ada Lovelace");

        let email_only = AccountProfile {
            account_id: "acct-2".to_string(),
            display_name: "   ".to_string(),
            email: Some("grace@example.com".to_string()),
        };
        assert_eq!(email_only.display_label(), "grace@example.com");

        let bare = AccountProfile {
            account_id: "acct-3".to_string(),
            display_name: String::new(),
            email: None,
        };
        assert_eq!(bare.display_label(), "Unknown");
    }
}
