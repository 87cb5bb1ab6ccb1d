use std::path::Path;

use anyhow::Context;
use tally_config::TallyConfig;
use tally_core::entities::{AuditResult, IndividualRecord};
use tally_engine::AuditSettings;

use crate::cli::GlobalFlags;

/// Audit settings from the rules file with configured overrides on top.
///
/// An explicit `--rules` path must load and is taken as given. The configured
/// path is resolved against `--config-dir` and may be absent, in which case the
/// policy comes from configuration alone.
pub fn audit_settings(
    config: &TallyConfig,
    flags: &GlobalFlags,
    rules_override: Option<&Path>,
) -> anyhow::Result<AuditSettings> {
    let rules_path = rules_override.map_or_else(
        || flags.resolve(&config.paths.rules),
        Path::to_path_buf,
    );

    let policy = if rules_override.is_none() && !rules_path.exists() {
        tracing::debug!(path = %rules_path.display(), "no rules file; using configured policy");
        config.policy()
    } else {
        let base = tally_store::load_rules(&rules_path, config.audit.default_required)
            .with_context(|| format!("failed to load audit rules from {}", rules_path.display()))?;
        config.apply_policy_overrides(base)
    };

    Ok(AuditSettings::new(policy, config.audit.horizon_end).with_week_start(config.audit.week_start))
}

/// Load and audit one record file.
pub fn audit_file(path: &Path, settings: &AuditSettings) -> anyhow::Result<(IndividualRecord, AuditResult)> {
    let record = tally_store::load_record(path)
        .with_context(|| format!("failed to load record {}", path.display()))?;
    let result = tally_engine::audit_record(&record, settings)
        .with_context(|| format!("failed to audit record {}", path.display()))?;
    Ok((record, result))
}
