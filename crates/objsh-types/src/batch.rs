//! Batch adapter: one code path for single and batched verb arguments.
//!
//! A verb argument may be a single item, an ordered list, or a keyed map.
//! `Batch::apply` runs a per-item function and returns the congruent shape,
//! so `mkdir("a")` and `mkdir(["a", "b"])` share an implementation.

use std::collections::BTreeMap;

use thiserror::Error;

/// Shape or length mismatch between two batches zipped in tandem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("batch shape mismatch: {0}")]
pub struct ShapeMismatch(pub String);

/// A verb argument in one of the three accepted shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch<T> {
    /// A single item.
    One(T),
    /// An ordered list of items; results preserve order.
    Seq(Vec<T>),
    /// A keyed map of items; results keep the same keys.
    Map(BTreeMap<String, T>),
}

impl<T> Batch<T> {
    /// Number of items in the batch.
    pub fn len(&self) -> usize {
        match self {
            Batch::One(_) => 1,
            Batch::Seq(items) => items.len(),
            Batch::Map(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply a function to every item, producing the congruent shape.
    pub fn apply<R>(self, mut f: impl FnMut(T) -> R) -> Batch<R> {
        match self {
            Batch::One(item) => Batch::One(f(item)),
            Batch::Seq(items) => Batch::Seq(items.into_iter().map(f).collect()),
            Batch::Map(items) => Batch::Map(items.into_iter().map(|(k, v)| (k, f(v))).collect()),
        }
    }

    /// Pair two batches item-by-item.
    ///
    /// The shapes must agree: one with one, equal-length list with list,
    /// map with map sharing the same keys. Anything else is a
    /// [`ShapeMismatch`] and nothing is paired — callers use this for
    /// all-or-nothing argument validation before mutating anything.
    pub fn zip<U>(self, other: Batch<U>) -> Result<Batch<(T, U)>, ShapeMismatch> {
        match (self, other) {
            (Batch::One(a), Batch::One(b)) => Ok(Batch::One((a, b))),
            (Batch::Seq(a), Batch::Seq(b)) => {
                if a.len() != b.len() {
                    return Err(ShapeMismatch(format!(
                        "list lengths differ ({} vs {})",
                        a.len(),
                        b.len()
                    )));
                }
                Ok(Batch::Seq(a.into_iter().zip(b).collect()))
            }
            (Batch::Map(a), Batch::Map(mut b)) => {
                let mut pairs = BTreeMap::new();
                for (key, va) in a {
                    let Some(vb) = b.remove(&key) else {
                        return Err(ShapeMismatch(format!("key {key:?} missing on one side")));
                    };
                    pairs.insert(key, (va, vb));
                }
                if let Some(extra) = b.keys().next() {
                    return Err(ShapeMismatch(format!("key {extra:?} missing on one side")));
                }
                Ok(Batch::Map(pairs))
            }
            _ => Err(ShapeMismatch("argument shapes differ".into())),
        }
    }

    /// Collapse a single-item batch to its item.
    pub fn into_one(self) -> Option<T> {
        match self {
            Batch::One(item) => Some(item),
            _ => None,
        }
    }

    /// Iterate items in batch order (list order, or key order for maps).
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Batch::One(item) => Box::new(std::iter::once(item)),
            Batch::Seq(items) => Box::new(items.iter()),
            Batch::Map(items) => Box::new(items.values()),
        }
    }
}

impl From<&str> for Batch<String> {
    fn from(s: &str) -> Self {
        Batch::One(s.to_string())
    }
}

impl From<String> for Batch<String> {
    fn from(s: String) -> Self {
        Batch::One(s)
    }
}

impl From<Vec<String>> for Batch<String> {
    fn from(items: Vec<String>) -> Self {
        Batch::Seq(items)
    }
}

impl From<Vec<&str>> for Batch<String> {
    fn from(items: Vec<&str>) -> Self {
        Batch::Seq(items.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Batch<String> {
    fn from(items: &[&str]) -> Self {
        Batch::Seq(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<T> From<BTreeMap<String, T>> for Batch<T> {
    fn from(items: BTreeMap<String, T>) -> Self {
        Batch::Map(items)
    }
}
