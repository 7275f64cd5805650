//! Identity providers.

use storyboard_interface::{IdentityProvider, UserIdentity};

/// Environment variable read by [`EnvIdentityProvider::default`].
pub const USER_ENV_VAR: &str = "STORYBOARD_USER";

/// Provider returning a fixed identity, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentityProvider {
    identity: Option<UserIdentity>,
}

impl StaticIdentityProvider {
    /// Always reports `identity` as signed in.
    pub fn signed_in(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// Never reports anyone as signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn current(&self) -> Option<UserIdentity> {
        self.identity.clone()
    }
}

/// Provider reading the user id from an environment variable on each call.
///
/// An unset or blank variable means nobody is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvIdentityProvider {
    var: String,
}

impl EnvIdentityProvider {
    /// Reads the user id from `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable consulted.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvIdentityProvider {
    fn default() -> Self {
        Self::new(USER_ENV_VAR)
    }
}

impl IdentityProvider for EnvIdentityProvider {
    fn current(&self) -> Option<UserIdentity> {
        let id = std::env::var(&self.var).ok()?;
        let id = id.trim();
        (!id.is_empty()).then(|| UserIdentity::new(id))
    }
}
