// ── Subscription domain type ──

use strum::{Display, EnumString};

use super::entity_id::EntityId;

/// Billing plan for an owner account.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PlanType {
    Mensual,
    Semestral,
    Anual,
    #[strum(default)]
    Other(String),
}

impl PlanType {
    /// Human-facing label; unknown tags fall back to the raw value.
    pub fn label(&self) -> String {
        match self {
            Self::Mensual => "Mensual".into(),
            Self::Semestral => "Semestral".into(),
            Self::Anual => "Anual".into(),
            Self::Other(s) => s.clone(),
        }
    }
}

impl Default for PlanType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// A plan purchased by a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subscription {
    /// Server-assigned; `None` until persisted.
    pub id: Option<EntityId>,
    pub plan: PlanType,
    /// The subscribing user.
    pub user_id: Option<EntityId>,
}
