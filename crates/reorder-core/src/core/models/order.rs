use super::symbols::TypeId;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("the requested order contains no symbols")]
    Empty,
    #[error("symbol '{0}' appears more than once in the requested order")]
    Duplicate(String),
}

/// The requested sequence of type symbols. Position `i` (0-based) becomes type id `i + 1`.
///
/// Construction guarantees the sequence is non-empty and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOrder {
    symbols: Vec<String>,
}

impl TypeOrder {
    /// Parses a list of symbols separated by whitespace and/or commas, e.g. `"Co Ni,Al"`.
    pub fn parse(text: &str) -> Result<Self, OrderError> {
        Self::from_symbols(
            text.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty()),
        )
    }

    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(OrderError::Empty);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in &symbols {
            if !seen.insert(symbol.as_str()) {
                return Err(OrderError::Duplicate(symbol.clone()));
            }
        }
        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// `(new_id, symbol)` pairs, numbered from 1.
    pub fn numbered(&self) -> impl Iterator<Item = (TypeId, &str)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (i as TypeId + 1, s.as_str()))
    }

    pub fn new_id_of(&self, symbol: &str) -> Option<TypeId> {
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map(|i| i as TypeId + 1)
    }
}

impl fmt::Display for TypeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols.join(" "))
    }
}
