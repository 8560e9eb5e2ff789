use std::sync::Arc;

/// The jokes every stream session walks through, in order.
const DEFAULT_JOKES: [&str; 2] = [
    "Why did the epoch halve? To reduce supply!",
    "Salt is scarce, but laughter is infinite.",
];

/// Immutable, ordered list of joke messages.
///
/// Built once at startup and shared read-only for the life of the process.
/// Cloning is cheap (an `Arc` bump), so each stream session can hold its own
/// handle while keeping an independent cursor.
#[derive(Debug, Clone)]
pub struct JokeCatalog {
    jokes: Arc<[String]>,
}

impl JokeCatalog {
    pub fn new(jokes: Vec<String>) -> Self {
        Self {
            jokes: jokes.into(),
        }
    }

    pub fn default_jokes() -> Vec<String> {
        DEFAULT_JOKES.iter().map(|j| j.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.jokes.iter().map(|j| j.as_str())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.jokes.get(index).map(|j| j.as_str())
    }
}

impl Default for JokeCatalog {
    fn default() -> Self {
        Self::new(Self::default_jokes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_fixed_order() {
        let catalog = JokeCatalog::default();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(0),
            Some("Why did the epoch halve? To reduce supply!")
        );
        assert_eq!(
            catalog.get(1),
            Some("Salt is scarce, but laughter is infinite.")
        );
    }

    #[test]
    fn clones_share_the_same_list() {
        let catalog = JokeCatalog::new(vec!["one".to_string(), "two".to_string()]);
        let other = catalog.clone();
        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            other.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_catalog_is_legal() {
        let catalog = JokeCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
