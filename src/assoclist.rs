// Bare bones implementation of an association list, used for record fields.
// Order matters: record types are compared position by position, so this
// stays a plain vector rather than a map.
use crate::syntax::Label;

use std::slice;

/// Entries are stored the way the parser hands them over: last source field
/// first. Lookups therefore scan from the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssocList<K, V> {
    pub inner: Vec<(K, V)>,
}

impl<K: Clone + PartialEq, V> AssocList<K, V> {
    pub fn from_vec(pairs: Vec<(K, V)>) -> AssocList<K, V> {
        AssocList { inner: pairs }
    }

    pub fn from_source_order(mut pairs: Vec<(K, V)>) -> AssocList<K, V> {
        pairs.reverse();
        AssocList { inner: pairs }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (K, V)> {
        self.inner.iter()
    }

    /// First entry for `item` in source order
    pub fn lookup(&self, item: &K) -> Option<&V> {
        for (key, val) in self.inner.iter().rev() {
            if key == item {
                return Some(val);
            }
        }
        None
    }

    /// The `n`th field in source order, counting from 1
    pub fn nth_from_end(&self, n: usize) -> Option<&V> {
        if n == 0 || n > self.inner.len() {
            return None;
        }
        self.inner.get(self.inner.len() - n).map(|(_, val)| val)
    }

    pub fn map_val<T, E, F>(&self, mut func: F) -> Result<AssocList<K, T>, E>
    where
        F: FnMut(&V) -> Result<T, E>,
    {
        let result: Result<Vec<(K, T)>, E> = self
            .inner
            .iter()
            .map(|(key, val)| func(val).map(|res| (key.clone(), res)))
            .collect();
        result.map(AssocList::from_vec)
    }

    pub fn map_owned<T, F>(self, mut func: F) -> AssocList<K, T>
    where
        F: FnMut(V) -> T,
    {
        AssocList::from_vec(
            self.inner
                .into_iter()
                .map(|(key, val)| (key, func(val)))
                .collect(),
        )
    }
}

impl<V> AssocList<Label, V> {
    /// Positional labels select by position, names by the first match
    pub fn get(&self, label: &Label) -> Option<&V> {
        match *label {
            Label::Pos(n) => self.nth_from_end(n),
            Label::Name(_) => self.lookup(label),
        }
    }
}
