use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::ui;

/// Record counter shown on stderr while `tally run` audits.
///
/// Inert when progress is disabled, so callers never branch on it.
pub struct RecordProgress {
    bar: Option<ProgressBar>,
}

impl RecordProgress {
    #[must_use]
    pub fn start(records: usize) -> Self {
        if !ui::prefs().progress || records == 0 {
            return Self { bar: None };
        }

        let template = if ui::prefs().term_width.is_some_and(|cols| cols < 80) {
            "{pos}/{len} records"
        } else {
            "{bar:40.cyan/blue} {pos}/{len} records audited"
        };
        let bar = ProgressBar::with_draw_target(
            Some(u64::try_from(records).unwrap_or(u64::MAX)),
            ProgressDrawTarget::stderr(),
        );
        bar.set_style(
            ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar: Some(bar) }
    }

    pub fn advance(&self, records: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(u64::try_from(records).unwrap_or(u64::MAX));
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
