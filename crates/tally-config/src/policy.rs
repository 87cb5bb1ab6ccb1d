//! Policy tier overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tier → required weekly count, layered on top of the rules file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub tiers: BTreeMap<String, u32>,
}
