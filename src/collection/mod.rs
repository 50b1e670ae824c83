//! Insertion-ordered collections of typed results keyed by ticker symbol.

mod cache;
pub(crate) mod mapper;

use std::collections::HashMap;

use crate::core::FmpError;

pub use cache::CacheBlob;

/// An ordered mapping from symbol to a single result type.
///
/// Iteration follows insertion order. Inserting an existing symbol replaces its value and
/// keeps its position.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCollection<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for SymbolCollection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> SymbolCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, symbol: String, value: T) {
        if let Some(&pos) = self.index.get(&symbol) {
            self.entries[pos].1 = value;
        } else {
            self.index.insert(symbol.clone(), self.entries.len());
            self.entries.push((symbol, value));
        }
    }

    /// Appends every entry of `other`, with `other` winning on duplicates.
    pub(crate) fn extend_from(&mut self, other: SymbolCollection<T>) {
        for (symbol, value) in other.entries {
            self.insert(symbol, value);
        }
    }

    pub fn has(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// # Errors
    ///
    /// `NotFound` when the symbol is absent.
    pub fn get(&self, symbol: &str) -> Result<&T, FmpError> {
        self.get_opt(symbol).ok_or_else(|| FmpError::NotFound {
            symbol: symbol.to_string(),
        })
    }

    pub fn get_opt(&self, symbol: &str) -> Option<&T> {
        self.index.get(symbol).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(s, v)| (s.as_str(), v))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// All entries in insertion order.
    pub fn into_inner(self) -> Vec<(String, T)> {
        self.entries
    }
}

impl<T> FromIterator<(String, T)> for SymbolCollection<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (symbol, value) in iter {
            out.insert(symbol, value);
        }
        out
    }
}

impl<T> IntoIterator for SymbolCollection<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SymbolCollection<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a T)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
