//! Prefix completion over an explicit symbol table.
//!
//! The console suggests completions from a fixed, enumerable list of
//! symbols handed to it by the embedder — never by reflecting over some
//! ambient global namespace.

/// An ordered, duplicate-free list of completable symbols.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<String>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol, keeping insertion order. Duplicates are ignored.
    pub fn insert(&mut self, symbol: impl Into<String>) {
        let symbol = symbol.into();
        if !self.symbols.iter().any(|s| *s == symbol) {
            self.symbols.push(symbol);
        }
    }

    /// Returns the symbols starting with `prefix`, in insertion order.
    ///
    /// An empty prefix matches every symbol.
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Vec<&str> {
        self.symbols
            .iter()
            .filter(|s| s.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    /// Number of symbols in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the table holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
