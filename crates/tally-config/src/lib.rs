//! # tally-config
//!
//! Layered configuration loading for Tally using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TALLY_*` prefix, `__` as separator)
//! 2. Project-level `.tally/config.toml`
//! 3. User-level `~/.config/tally/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TALLY_AUDIT__HORIZON_END` -> `audit.horizon_end`,
//! `TALLY_PATHS__OUTPUT` -> `paths.output`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tally_config::TallyConfig;
//!
//! let config = TallyConfig::load_with_dotenv(None).expect("config");
//! println!("auditing through {}", config.audit.horizon_end);
//! ```

mod audit;
mod error;
mod output;
mod paths;
mod policy;

pub use audit::AuditConfig;
pub use error::ConfigError;
pub use output::OutputConfig;
pub use paths::PathsConfig;
pub use policy::PolicyConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_core::policy::Policy;

/// Directory holding the project-level config file.
pub const PROJECT_DIR: &str = ".tally";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl TallyConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// `project_dir` is where `.tally/config.toml` is looked up; `None` means the
    /// current directory. Does NOT read `.env`; see [`Self::load_with_dotenv`].
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_dir).extract()?;
        config.audit.validate()?;
        Ok(config)
    }

    /// Load `.env` from the project directory (or the current directory), then
    /// load configuration.
    pub fn load_with_dotenv(project_dir: Option<&Path>) -> Result<Self, ConfigError> {
        match project_dir {
            Some(dir) if dir.join(".env").exists() => {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
            _ => {
                let _ = dotenvy::dotenv();
            }
        }
        Self::load(project_dir)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(project_dir: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = project_dir
            .map_or_else(|| PathBuf::from(PROJECT_DIR), |dir| dir.join(PROJECT_DIR))
            .join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TALLY_").split("__"))
    }

    /// Policy seeded with the configured default and tier overrides.
    #[must_use]
    pub fn policy(&self) -> Policy {
        Policy::new(self.policy.tiers.clone(), self.audit.default_required)
    }

    /// Overlay the configured tier overrides on a policy loaded elsewhere.
    #[must_use]
    pub fn apply_policy_overrides(&self, base: Policy) -> Policy {
        let mut policy = base.with_overrides(&self.policy.tiers);
        policy.default_required = self.audit.default_required;
        policy
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tally").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn default_config_loads() {
        let config = TallyConfig::default();
        assert!(config.policy.tiers.is_empty());
        assert!(config.output.calendars);
        assert_eq!(config.audit.default_required, 2);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: TallyConfig = TallyConfig::figment(Some(Path::new("/nonexistent-tally")))
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.audit.horizon_end.to_string(), "2024-12-31");
        assert_eq!(config.paths.rules, PathBuf::from("data/audit_rules.json"));
    }

    #[test]
    fn overrides_layer_on_loaded_policy() {
        let mut config = TallyConfig::default();
        config.policy.tiers.insert("high".into(), 4);
        config.audit.default_required = 1;

        let mut base = BTreeMap::new();
        base.insert("high".to_string(), 3);
        base.insert("low".to_string(), 2);
        let policy = config.apply_policy_overrides(Policy::new(base, 2));

        assert_eq!(policy.required_for("high"), 4);
        assert_eq!(policy.required_for("low"), 2);
        assert_eq!(policy.required_for("unknown"), 1);
    }
}
