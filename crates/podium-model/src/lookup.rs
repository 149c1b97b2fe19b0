use std::collections::HashMap;

/// Uppercase-keyed index from a name to its canonical spelling.
///
/// Used to match country labels against registry display names without
/// regard to case. The first spelling inserted for a key wins.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveIndex {
    map: HashMap<String, String>,
}

impl CaseInsensitiveIndex {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for name in names {
            index.insert(name.as_ref());
        }
        index
    }

    pub fn insert(&mut self, name: &str) {
        self.map
            .entry(name.to_uppercase())
            .or_insert_with(|| name.to_string());
    }

    /// Canonical spelling for `name`, matched case-insensitively.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.map.get(&name.to_uppercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
