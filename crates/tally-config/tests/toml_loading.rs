//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working-directory manipulation.

use chrono::NaiveDate;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tally_config::{ConfigError, TallyConfig};
use tally_core::enums::WeekStart;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn loads_audit_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
period_start = "2025-01-01"
horizon_end = "2025-06-30"
week_start = "sunday"
default_required = 3
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.audit.period_start, date(2025, 1, 1));
        assert_eq!(config.audit.horizon_end, date(2025, 6, 30));
        assert_eq!(config.audit.week_start, WeekStart::Sunday);
        assert_eq!(config.audit.default_required, 3);
        Ok(())
    });
}

#[test]
fn loads_policy_tiers_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[policy.tiers]
low = 2
high = 3
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.policy.tiers.get("low"), Some(&2));
        assert_eq!(config.policy.tiers.get("high"), Some(&3));
        assert_eq!(config.policy().required_for("high"), 3);
        assert_eq!(config.policy().required_for("medium"), 2);
        Ok(())
    });
}

#[test]
fn loads_paths_and_output_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[paths]
rules = "rules/custom.json"
records = "input"
output = "out"

[output]
calendars = false
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.paths.rules, PathBuf::from("rules/custom.json"));
        assert_eq!(config.paths.records, PathBuf::from("input"));
        assert_eq!(config.paths.summary_file(), PathBuf::from("out/summary.csv"));
        assert!(!config.output.calendars);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
horizon_end = "2024-06-30"
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.audit.horizon_end, date(2024, 6, 30));
        assert_eq!(config.audit.period_start, date(2024, 1, 1));
        assert_eq!(config.audit.week_start, WeekStart::Monday);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_AUDIT__DEFAULT_REQUIRED", "4");

        jail.create_file(
            "config.toml",
            r#"
[audit]
default_required = 1
week_start = "sunday"
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TALLY_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.audit.default_required, 4);
        // TOML value not overridden by env should remain
        assert_eq!(config.audit.week_start, WeekStart::Sunday);
        Ok(())
    });
}

#[test]
fn env_var_sets_horizon_end() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_AUDIT__HORIZON_END", "2025-12-31");

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Env::prefixed("TALLY_").split("__"))
            .extract()?;

        assert_eq!(config.audit.horizon_end, date(2025, 12, 31));
        Ok(())
    });
}

/// Typo'd env var keys are silently ignored by figment; the default survives.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_AUDIT__HORIZON_ENDD", "2030-01-01");

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Env::prefixed("TALLY_").split("__"))
            .extract()?;

        assert_eq!(config.audit.horizon_end, date(2024, 12, 31));
        Ok(())
    });
}

#[test]
fn load_reads_project_config_dir() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".tally")).expect("create .tally");
        jail.create_file(
            ".tally/config.toml",
            r#"
[audit]
horizon_end = "2024-03-31"
"#,
        )?;

        let config = TallyConfig::load(None).expect("config loads");
        assert_eq!(config.audit.horizon_end, date(2024, 3, 31));

        let explicit = TallyConfig::load(Some(jail.directory())).expect("config loads");
        assert_eq!(explicit.audit.horizon_end, date(2024, 3, 31));
        Ok(())
    });
}

#[test]
fn load_rejects_inverted_period() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_AUDIT__PERIOD_START", "2025-01-01");
        jail.set_env("TALLY_AUDIT__HORIZON_END", "2024-12-31");

        let err = TallyConfig::load(None).expect_err("period is inverted");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn invalid_week_start_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_AUDIT__WEEK_START", "someday");

        let err = TallyConfig::load(None).expect_err("unknown weekday");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
