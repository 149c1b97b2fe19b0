//! Country-label reconciliation.
//!
//! Maps an arbitrary host-country label (a correct display name, a cased
//! variant, or a garbled string) onto a registry entry. Rules run in
//! order, first hit wins:
//!
//! 1. exact display-name match;
//! 2. case-insensitive match through the uppercase-keyed name index;
//! 3. positional character-overlap similarity above 0.8;
//! 4. otherwise the label stays unresolved, preserved verbatim.
//!
//! The similarity metric is deliberately narrow: it counts index-aligned
//! character matches and divides by the longer length, so it only rewards
//! near-identical spellings of near-identical length. It is not edit
//! distance and not token overlap, and it will under-match renamed or
//! reordered country names. That behavior is part of the contract.

use tracing::debug;

use podium_model::HostCountry;

use crate::registry::CountryRegistry;

/// Similarity threshold; a best match at or below it is rejected.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Result of reconciling one label. Reconciliation never fails; the worst
/// outcome is an unresolved label carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Label already equals a registry display name.
    Verbatim(String),
    /// Label matched a display name after case folding or similarity.
    Corrected(String),
    /// No registry entry came close enough.
    Unresolved(String),
}

impl ReconcileOutcome {
    pub fn into_host_country(self) -> HostCountry {
        match self {
            ReconcileOutcome::Verbatim(name) | ReconcileOutcome::Corrected(name) => {
                HostCountry::Resolved(name)
            }
            ReconcileOutcome::Unresolved(label) => HostCountry::Unresolved(label),
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, ReconcileOutcome::Unresolved(_))
    }
}

/// Counts of labels fixed by the non-exact rules and labels left
/// unresolved. Diagnostic reporting only; never feeds back into matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReconcileStats {
    pub corrected: usize,
    pub unresolved: usize,
}

/// Positional character-overlap ratio between two strings.
///
/// Counts index positions where the lowercased characters agree, divided
/// by the longer character count. Returns 0.0 when both are empty.
pub fn positional_overlap(label: &str, name: &str) -> f64 {
    let label_len = label.chars().count();
    let name_len = name.chars().count();
    let denom = label_len.max(name_len);
    if denom == 0 {
        return 0.0;
    }
    let label_lower = label.to_lowercase();
    let name_lower = name.to_lowercase();
    let matches = label_lower
        .chars()
        .zip(name_lower.chars())
        .filter(|(a, b)| a == b)
        .count();
    matches as f64 / denom as f64
}

#[derive(Debug)]
pub struct Reconciler<'a> {
    registry: &'a CountryRegistry,
    stats: ReconcileStats,
}

impl<'a> Reconciler<'a> {
    pub fn new(registry: &'a CountryRegistry) -> Self {
        Self {
            registry,
            stats: ReconcileStats::default(),
        }
    }

    pub fn reconcile(&mut self, label: &str) -> ReconcileOutcome {
        if self.registry.code_for_name(label).is_some() {
            return ReconcileOutcome::Verbatim(label.to_string());
        }

        if let Some(canonical) = self.registry.name_index().canonical(label) {
            self.stats.corrected += 1;
            debug!(label, canonical, "country label corrected by case folding");
            return ReconcileOutcome::Corrected(canonical.to_string());
        }

        if let Some(closest) = self.closest_by_overlap(label) {
            self.stats.corrected += 1;
            debug!(label, closest, "country label corrected by similarity");
            return ReconcileOutcome::Corrected(closest.to_string());
        }

        self.stats.unresolved += 1;
        ReconcileOutcome::Unresolved(label.to_string())
    }

    pub fn stats(&self) -> ReconcileStats {
        self.stats
    }

    fn closest_by_overlap(&self, label: &str) -> Option<&'a str> {
        let mut best: Option<&str> = None;
        let mut best_ratio = SIMILARITY_THRESHOLD;
        for name in self.registry.display_names() {
            let ratio = positional_overlap(label, name);
            if ratio > best_ratio {
                best_ratio = ratio;
                best = Some(name);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_model::{CountryProfile, NocCode};

    fn registry() -> CountryRegistry {
        CountryRegistry::new(vec![
            CountryProfile::new(NocCode::new("GRE").unwrap(), "Greece"),
            CountryProfile::new(NocCode::new("USA").unwrap(), "United States"),
            CountryProfile::new(NocCode::new("GBR").unwrap(), "Great Britain"),
        ])
    }

    #[test]
    fn exact_names_pass_through_verbatim() {
        let registry = registry();
        let mut reconciler = Reconciler::new(&registry);
        assert_eq!(
            reconciler.reconcile("Greece"),
            ReconcileOutcome::Verbatim("Greece".to_string())
        );
        assert_eq!(reconciler.stats(), ReconcileStats::default());
    }

    #[test]
    fn cased_variants_resolve_to_the_registered_spelling() {
        let registry = registry();
        let mut reconciler = Reconciler::new(&registry);
        assert_eq!(
            reconciler.reconcile("UNITED STATES"),
            ReconcileOutcome::Corrected("United States".to_string())
        );
        assert_eq!(reconciler.stats().corrected, 1);
    }

    #[test]
    fn near_identical_spellings_resolve_by_overlap() {
        let registry = registry();
        let mut reconciler = Reconciler::new(&registry);
        // One wrong character out of thirteen: ratio 12/13 > 0.8.
        assert_eq!(
            reconciler.reconcile("United Statez"),
            ReconcileOutcome::Corrected("United States".to_string())
        );
    }

    #[test]
    fn garbled_labels_stay_unresolved_verbatim() {
        let registry = registry();
        let mut reconciler = Reconciler::new(&registry);
        let outcome = reconciler.reconcile("Kingdom of Ruritania");
        assert_eq!(
            outcome,
            ReconcileOutcome::Unresolved("Kingdom of Ruritania".to_string())
        );
        assert_eq!(reconciler.stats().unresolved, 1);
    }

    #[test]
    fn transposed_words_do_not_match() {
        // "States United" shares almost no aligned positions with
        // "United States"; the positional metric rejects it by design.
        let registry = registry();
        let mut reconciler = Reconciler::new(&registry);
        assert!(reconciler.reconcile("States United").is_unresolved());
    }

    #[test]
    fn overlap_ratio_is_position_sensitive() {
        assert_eq!(positional_overlap("Greece", "Greece"), 1.0);
        assert_eq!(positional_overlap("greece", "Greece"), 1.0);
        assert!(positional_overlap("Greeze", "Greece") > 0.8);
        // Same letters, shifted by one position.
        assert!(positional_overlap("XGreece", "Greece") < 0.2);
        assert_eq!(positional_overlap("", ""), 0.0);
    }

    #[test]
    fn empty_labels_are_unresolved() {
        let registry = registry();
        let mut reconciler = Reconciler::new(&registry);
        assert!(reconciler.reconcile("").is_unresolved());
    }
}
