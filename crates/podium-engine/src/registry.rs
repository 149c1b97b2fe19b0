use std::collections::HashMap;

use podium_model::{CaseInsensitiveIndex, CountryProfile, NocCode};

/// Canonical table of (code, display name) pairs.
///
/// Built once from the country-profile dataset and read-only afterwards;
/// every other component resolves country identity through it.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    profiles: Vec<CountryProfile>,
    by_code: HashMap<NocCode, usize>,
    code_by_name: HashMap<String, NocCode>,
    name_index: CaseInsensitiveIndex,
}

impl CountryRegistry {
    pub fn new(profiles: Vec<CountryProfile>) -> Self {
        let mut by_code = HashMap::with_capacity(profiles.len());
        let mut code_by_name = HashMap::with_capacity(profiles.len());
        let mut name_index = CaseInsensitiveIndex::default();
        for (idx, profile) in profiles.iter().enumerate() {
            by_code.entry(profile.noc.clone()).or_insert(idx);
            code_by_name
                .entry(profile.name.clone())
                .or_insert_with(|| profile.noc.clone());
            name_index.insert(&profile.name);
        }
        Self {
            profiles,
            by_code,
            code_by_name,
            name_index,
        }
    }

    /// Display name registered for `code`.
    pub fn lookup_by_code(&self, code: &NocCode) -> Option<&str> {
        self.by_code
            .get(code)
            .map(|idx| self.profiles[*idx].name.as_str())
    }

    /// Display name for `code`, falling back to the code itself when the
    /// registry has no entry.
    pub fn display_name_or_code(&self, code: &NocCode) -> String {
        self.lookup_by_code(code)
            .map_or_else(|| code.as_str().to_string(), ToString::to_string)
    }

    /// Code registered for an exact display name.
    pub fn code_for_name(&self, name: &str) -> Option<&NocCode> {
        self.code_by_name.get(name)
    }

    /// Uppercase-keyed index over display names, used by the reconciler's
    /// case-insensitive rule.
    pub fn name_index(&self) -> &CaseInsensitiveIndex {
        &self.name_index
    }

    /// Profiles in load order.
    pub fn profiles(&self) -> &[CountryProfile] {
        &self.profiles
    }

    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
