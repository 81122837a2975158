// ── Hotel domain type ──

use super::entity_id::EntityId;
use super::user::User;

/// A property listed by an owner account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hotel {
    /// Server-assigned; `None` until persisted.
    pub id: Option<EntityId>,
    pub name: String,
    pub image: String,
    pub address: String,
    pub phone: String,
    /// Owning user. Non-null once created -- the store stamps the
    /// session user on create.
    pub owner_id: Option<EntityId>,
    /// Resolved owner. Only attached explicitly via
    /// [`with_owner`](Self::with_owner).
    pub owner: Option<User>,
}

impl Hotel {
    /// Attach a pre-validated owner entity.
    pub fn with_owner(mut self, owner: User) -> Self {
        self.owner = Some(owner);
        self
    }
}
