// ── User domain type ──

use strum::{Display, EnumString};

use super::entity_id::EntityId;
use super::subscription::Subscription;

/// Account role tag. Gates the owner-scoped derived views.
///
/// The backend stores free-form strings; anything that is not a known
/// tag survives round-trips through the catch-all variant.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Owner,
    Client,
    #[strum(default)]
    Other(String),
}

impl UserRole {
    /// An empty tag: the record never had a role assigned.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Other(s) if s.is_empty())
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, Self::Owner)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// An account on the platform: hotel owners and booking clients alike.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    /// Server-assigned; `None` until persisted.
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    /// Plaintext, exactly as the backend stores it. Login compares verbatim.
    pub password: String,
    pub role: UserRole,
    pub subscription_id: Option<EntityId>,
    /// Resolved subscription. Only ever attached explicitly via
    /// [`with_subscription`](Self::with_subscription) -- never built from
    /// a raw nested payload.
    pub subscription: Option<Subscription>,
}

impl User {
    /// Attach a pre-validated subscription entity.
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = Some(subscription);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_and_unknown_tags() {
        assert_eq!("owner".parse::<UserRole>(), Ok(UserRole::Owner));
        assert_eq!("client".parse::<UserRole>(), Ok(UserRole::Client));
        assert_eq!(
            "moderator".parse::<UserRole>(),
            Ok(UserRole::Other("moderator".into()))
        );
    }

    #[test]
    fn role_display_round_trips() {
        assert_eq!(UserRole::Owner.to_string(), "owner");
        assert_eq!(UserRole::Other("moderator".into()).to_string(), "moderator");
    }

    #[test]
    fn default_role_is_unset() {
        assert!(UserRole::default().is_unset());
        assert!(!UserRole::Client.is_unset());
    }
}
