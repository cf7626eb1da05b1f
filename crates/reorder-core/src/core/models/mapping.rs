use super::symbols::TypeId;
use std::collections::{BTreeMap, BTreeSet};

/// A bijection from the type ids found in a file to the ids they are renumbered to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMapping {
    forward: BTreeMap<TypeId, TypeId>,
}

impl IdMapping {
    /// The identity mapping over `1..=count`.
    pub fn identity(count: usize) -> Self {
        (1..=count as TypeId).map(|id| (id, id)).collect()
    }

    pub fn get(&self, old_id: TypeId) -> Option<TypeId> {
        self.forward.get(&old_id).copied()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.forward.iter().all(|(old, new)| old == new)
    }

    pub fn old_ids(&self) -> BTreeSet<TypeId> {
        self.forward.keys().copied().collect()
    }

    /// `(old_id, new_id)` pairs in ascending old-id order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, TypeId)> + '_ {
        self.forward.iter().map(|(&old, &new)| (old, new))
    }

    pub fn inverse(&self) -> Self {
        self.iter().map(|(old, new)| (new, old)).collect()
    }

    /// Applies `self` then `next`. Ids that `next` does not cover are dropped.
    pub fn then(&self, next: &IdMapping) -> Self {
        self.iter()
            .filter_map(|(old, mid)| next.get(mid).map(|new| (old, new)))
            .collect()
    }
}

impl FromIterator<(TypeId, TypeId)> for IdMapping {
    fn from_iter<I: IntoIterator<Item = (TypeId, TypeId)>>(iter: I) -> Self {
        Self {
            forward: iter.into_iter().collect(),
        }
    }
}
