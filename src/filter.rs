//! Autocomplete source: a master list of country names and a substring filter over it.

/// Holds the master list of names. Filtering never mutates it.
#[derive(Debug, Clone, Default)]
pub struct OptionFilter {
    all: Vec<String>,
}

impl OptionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the master list. Blank and duplicate names are dropped, order is kept.
    pub fn initialize<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !all.contains(&name) {
                all.push(name);
            }
        }
        self.all = all;
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Names containing `query` case-insensitively. An empty query yields the full list.
    pub fn filter(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.all.clone();
        }
        // Linear scan is fine, there are fewer than 300 countries.
        self.all
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
