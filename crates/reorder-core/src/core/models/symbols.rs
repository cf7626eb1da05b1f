use std::collections::{BTreeMap, BTreeSet};

/// A type id as written in a LAMMPS data file. Valid ids start at 1.
pub type TypeId = u32;

/// Associates type ids with short symbols such as element names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSymbolMap {
    symbols: BTreeMap<TypeId, String>,
}

impl TypeSymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an association, returning the symbol previously bound to `id`.
    pub fn insert(&mut self, id: TypeId, symbol: impl Into<String>) -> Option<String> {
        self.symbols.insert(id, symbol.into())
    }

    pub fn get(&self, id: TypeId) -> Option<&str> {
        self.symbols.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Associations in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str)> {
        self.symbols.iter().map(|(&id, s)| (id, s.as_str()))
    }

    pub fn symbol_set(&self) -> BTreeSet<&str> {
        self.symbols.values().map(String::as_str).collect()
    }

    /// The lowest id carrying `symbol`.
    pub fn id_of(&self, symbol: &str) -> Option<TypeId> {
        self.iter().find(|(_, s)| *s == symbol).map(|(id, _)| id)
    }
}

impl FromIterator<(TypeId, String)> for TypeSymbolMap {
    fn from_iter<I: IntoIterator<Item = (TypeId, String)>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MassEntry {
    pub mass: f64,
    pub comment: Option<String>,
}

/// Per-type masses as read from a `Masses` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassTable {
    entries: BTreeMap<TypeId, MassEntry>,
}

impl MassTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TypeId, entry: MassEntry) -> Option<MassEntry> {
        self.entries.insert(id, entry)
    }

    pub fn get(&self, id: TypeId) -> Option<&MassEntry> {
        self.entries.get(&id)
    }

    pub fn mass(&self, id: TypeId) -> Option<f64> {
        self.get(id).map(|entry| entry.mass)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &MassEntry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }
}
