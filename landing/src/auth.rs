//! Authentication status as seen by the page.
//!
//! The identity provider is an external widget. The page never talks to it
//! directly: it receives an [`AuthStatus`] and decides which
//! [`IdentityAffordance`] slots to render. The provider mounts its own UI
//! into those slots.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use thiserror::Error;

/// Signed-in state reported by the identity collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthStatus {
    SignedIn,
    #[default]
    SignedOut,
}

/// Raised when the identity collaborator reports a status we don't know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown auth status `{0}` (expected `signed-in` or `signed-out`)")]
pub struct AuthStatusParseError(pub String);

impl AuthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthStatus::SignedIn => "signed-in",
            AuthStatus::SignedOut => "signed-out",
        }
    }

    /// Affordances to show, in display order.
    pub fn affordances(&self) -> &'static [IdentityAffordance] {
        match self {
            AuthStatus::SignedIn => &[IdentityAffordance::AccountMenu],
            AuthStatus::SignedOut => &[IdentityAffordance::SignIn, IdentityAffordance::SignUp],
        }
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthStatus {
    type Err = AuthStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signed-in" => Ok(AuthStatus::SignedIn),
            "signed-out" => Ok(AuthStatus::SignedOut),
            _ => Err(AuthStatusParseError(s.to_string())),
        }
    }
}

/// A widget the identity provider renders into the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityAffordance {
    SignIn,
    SignUp,
    AccountMenu,
}

impl IdentityAffordance {
    /// Value of the `data-identity-slot` attribute the provider mounts into.
    pub fn slot(&self) -> &'static str {
        match self {
            IdentityAffordance::SignIn => "sign-in",
            IdentityAffordance::SignUp => "sign-up",
            IdentityAffordance::AccountMenu => "account-menu",
        }
    }

    /// Text of the fallback link shown until the provider takes over the slot.
    pub fn label(&self) -> &'static str {
        match self {
            IdentityAffordance::SignIn => "Sign In",
            IdentityAffordance::SignUp => "Sign Up",
            IdentityAffordance::AccountMenu => "Account",
        }
    }

    /// Where the fallback link points.
    pub fn href(&self) -> &'static str {
        match self {
            IdentityAffordance::SignIn => "/sign-in",
            IdentityAffordance::SignUp => "/sign-up",
            IdentityAffordance::AccountMenu => "/profile",
        }
    }
}

/// Reactive auth status shared through context.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext(pub Signal<AuthStatus>);

/// Make `status` available to every section below the current owner.
pub fn provide_auth(status: Signal<AuthStatus>) {
    provide_context(AuthContext(status));
}

/// Current auth status. Signed out when no provider was installed.
pub fn use_auth_status() -> Signal<AuthStatus> {
    use_context::<AuthContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::stored(AuthStatus::SignedOut))
}
