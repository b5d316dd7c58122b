/// Decides which records take part in the analysis, by name prefix
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScopeFilter {
    prefixes: Vec<String>,
}

impl ScopeFilter {
    /// Admits every record
    pub fn everything() -> Self {
        Self::default()
    }

    /// Records in the ALICE O2 namespaces, old and new
    pub fn alice_o2() -> Self {
        Self::default().with_prefix("AliceO2::").with_prefix("o2::")
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.add_prefix(prefix);
        self
    }

    pub fn add_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();

        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn admits(&self, record: &str) -> bool {
        self.prefixes.is_empty()
            || self
                .prefixes
                .iter()
                .any(|prefix| record.starts_with(prefix.as_str()))
    }
}
