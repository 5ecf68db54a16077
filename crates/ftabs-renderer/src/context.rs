//! Build-scoped state shared across every document in a build.
//!
//! One [`BuildContext`] lives for the whole build. It hands out group ids,
//! tracks the largest group seen so the generated stylesheet can cover it,
//! and collects diagnostics. When the last document has been resolved,
//! [`BuildContext::finish`] consumes the context and produces the build-wide
//! artifacts.

use ftabs_config::FilterTabsConfig;
use ftabs_model::{BuilderFormat, Diagnostic, Severity};

use crate::stylesheet;

/// Build-wide outputs, produced once per build.
#[derive(Debug)]
pub struct BuildArtifacts {
    /// Generated theme stylesheet covering every group in the build.
    pub stylesheet: String,
    /// Every diagnostic reported during the build, in report order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Mutable state threaded through parsing and resolution for one build.
#[derive(Debug)]
pub struct BuildContext {
    format: BuilderFormat,
    config: FilterTabsConfig,
    next_group: usize,
    max_slots: usize,
    max_group: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl BuildContext {
    #[must_use]
    pub fn new(format: BuilderFormat, config: FilterTabsConfig) -> Self {
        Self {
            format,
            config,
            next_group: 1,
            max_slots: 0,
            max_group: None,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn format(&self) -> BuilderFormat {
        self.format
    }

    #[must_use]
    pub fn config(&self) -> &FilterTabsConfig {
        &self.config
    }

    /// Allocate the next build-unique group id.
    pub fn next_group_id(&mut self) -> String {
        let id = format!("filter-group-{}", self.next_group);
        self.next_group += 1;
        id
    }

    /// Record a diagnostic and log it at its severity.
    pub fn report(&mut self, diag: &Diagnostic) {
        match diag.severity() {
            Severity::Warning => tracing::warn!("{diag}"),
            Severity::Error => tracing::error!("{diag}"),
        }
        self.diagnostics.push(diag.clone());
    }

    /// Diagnostics reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Record the slot count of a resolved group. The maximum only ever
    /// grows, so the stylesheet covers every group already rendered.
    pub fn observe_slot_count(&mut self, group_id: &str, count: usize) {
        if count > self.max_slots {
            self.max_slots = count;
            self.max_group = Some(group_id.to_owned());
        }
    }

    /// Largest slot count observed across the build.
    #[must_use]
    pub fn max_slot_count(&self) -> usize {
        self.max_slots
    }

    /// Consume the context and produce the build-wide artifacts.
    ///
    /// Size diagnostics are emitted here, once, from the frozen maximum:
    /// an error when the selector cap was exceeded, otherwise a warning
    /// when the advisory threshold was crossed.
    #[must_use]
    pub fn finish(mut self) -> BuildArtifacts {
        let cap = self.config.selector_cap;
        let warn_threshold = self.config.warn_threshold;
        if let Some(group) = self.max_group.clone() {
            if self.max_slots > cap {
                self.report(&Diagnostic::GroupSize {
                    group,
                    count: self.max_slots,
                    cap,
                });
            } else if self.max_slots > warn_threshold {
                self.report(&Diagnostic::LargeGroup {
                    group,
                    count: self.max_slots,
                });
            }
        }

        let stylesheet = stylesheet::generate(&self.config, self.max_slots);
        BuildArtifacts {
            stylesheet,
            diagnostics: self.diagnostics,
        }
    }
}
