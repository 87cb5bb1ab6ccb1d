use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tally_core::policy::Policy;

use crate::StoreError;

/// On-disk audit rules. Only the group-therapy table drives the audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditRules {
    #[serde(default)]
    pub group_therapy: BTreeMap<String, u32>,
}

impl AuditRules {
    #[must_use]
    pub fn into_policy(self, default_required: u32) -> Policy {
        Policy::new(self.group_therapy, default_required)
    }
}

/// Load the rules file at `path` into a policy with `default_required` for
/// unknown tiers.
pub fn load_rules(path: &Path, default_required: u32) -> Result<Policy, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let rules: AuditRules = serde_json::from_str(&raw).map_err(|e| StoreError::parse(path, e))?;
    tracing::debug!(
        path = %path.display(),
        tiers = rules.group_therapy.len(),
        "loaded audit rules"
    );
    Ok(rules.into_policy(default_required))
}
