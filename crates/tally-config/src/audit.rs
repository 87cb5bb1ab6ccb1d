//! Audit period and week-alignment configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_core::enums::WeekStart;
use tally_core::policy::DEFAULT_REQUIRED_PER_WEEK;

use crate::ConfigError;

fn default_period_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_horizon_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX)
}

const fn default_required() -> u32 {
    DEFAULT_REQUIRED_PER_WEEK
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// First day shown on calendars.
    #[serde(default = "default_period_start")]
    pub period_start: NaiveDate,

    /// Reporting-period cutoff shared by every individual.
    #[serde(default = "default_horizon_end")]
    pub horizon_end: NaiveDate,

    /// Weekday that starts a compliance week.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Required sessions per week for tiers missing from the policy.
    #[serde(default = "default_required")]
    pub default_required: u32,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            period_start: default_period_start(),
            horizon_end: default_horizon_end(),
            week_start: WeekStart::default(),
            default_required: default_required(),
        }
    }
}

impl AuditConfig {
    /// Reject a period that ends before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_start > self.horizon_end {
            return Err(ConfigError::InvalidValue {
                field: "audit.period_start".to_string(),
                reason: format!(
                    "{} is after audit.horizon_end {}",
                    self.period_start, self.horizon_end
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_calendar_year_2024() {
        let config = AuditConfig::default();
        assert_eq!(config.period_start.to_string(), "2024-01-01");
        assert_eq!(config.horizon_end.to_string(), "2024-12-31");
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.default_required, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_period_is_rejected() {
        let config = AuditConfig {
            period_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("audit.period_start"));
    }
}
