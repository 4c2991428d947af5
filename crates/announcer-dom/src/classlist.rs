//! Class list
//!
//! Space-separated class tokens of an element (`classList`).

/// Ordered set of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token. Returns false if it was already present or empty.
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token. Returns true if it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Serialized `class` attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Replace all tokens from an attribute value (duplicates collapse)
    pub fn set_value(&mut self, value: &str) {
        self.tokens.clear();
        for token in value.split_whitespace() {
            self.add(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_dedupes() {
        let mut list = ClassList::new();
        list.set_value("  a11y  a11y-visible a11y ");
        assert_eq!(list.value(), "a11y a11y-visible");
        assert!(list.contains("a11y-visible"));

        list.set_value("");
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_remove() {
        let mut list = ClassList::new();
        assert!(list.add("foo"));
        assert!(!list.add("foo"));
        assert!(!list.add(""));

        assert!(list.remove("foo"));
        assert!(!list.remove("foo"));
        assert!(list.is_empty());
    }
}
