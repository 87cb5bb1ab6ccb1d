use tally_config::TallyConfig;

/// Variables read directly by the binary rather than through figment.
const STANDALONE_VARS: [&str; 1] = ["TALLY_LOG"];

/// Emit warnings for likely mistyped env var keys and settings that silently
/// disable the audit.
pub fn warn_unconfigured(config: &TallyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TallyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("TALLY_"))
        .filter(|key| !STANDALONE_VARS.contains(&key.as_str()))
        .filter(|key| !key.contains("__"))
        .map(|key| {
            format!(
                "{key} is ignored. Use double underscores between section and key (example: TALLY_AUDIT__HORIZON_END)."
            )
        })
        .collect::<Vec<_>>();

    if config.audit.default_required == 0 {
        warnings.push(
            "audit.default_required is 0; records in unlisted tiers can never be deficient."
                .to_string(),
        );
    }

    warnings
}
