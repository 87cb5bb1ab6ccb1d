//! Tier → required weekly session count.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Required count for tiers absent from the mapping.
pub const DEFAULT_REQUIRED_PER_WEEK: u32 = 2;

const fn default_required() -> u32 {
    DEFAULT_REQUIRED_PER_WEEK
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Policy {
    #[serde(default)]
    pub tiers: BTreeMap<String, u32>,
    #[serde(default = "default_required")]
    pub default_required: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            tiers: BTreeMap::new(),
            default_required: default_required(),
        }
    }
}

impl Policy {
    #[must_use]
    pub fn new(tiers: BTreeMap<String, u32>, default_required: u32) -> Self {
        Self {
            tiers,
            default_required,
        }
    }

    /// Required GT sessions per week for `tier`, falling back to the default.
    #[must_use]
    pub fn required_for(&self, tier: &str) -> u32 {
        self.tiers
            .get(tier)
            .copied()
            .unwrap_or(self.default_required)
    }

    #[must_use]
    pub fn knows_tier(&self, tier: &str) -> bool {
        self.tiers.contains_key(tier)
    }

    /// Overlay `overrides` on top of this policy; entries in `overrides` win.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, u32>) -> Self {
        for (tier, count) in overrides {
            self.tiers.insert(tier.clone(), *count);
        }
        self
    }
}
