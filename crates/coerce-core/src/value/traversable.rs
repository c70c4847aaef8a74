//! Generic enumerable sources
//!
//! A [`Traversable`] is a handle to something that can be iterated,
//! not a container. Nothing is read from the source until
//! [`Traversable::iter`] is called, so handing a traversable around
//! never consumes it.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use super::{Array, Key, Value};

/// External iteration protocol
///
/// Each call to `traverse` starts a new pass over the source. One-shot
/// sources yield their items on the first pass and nothing afterwards.
pub trait Traverse: fmt::Debug + Send + Sync {
    fn traverse(&self) -> Box<dyn Iterator<Item = (Key, Value)> + '_>;
}

impl Traverse for Array {
    fn traverse(&self) -> Box<dyn Iterator<Item = (Key, Value)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.clone(), value.clone())))
    }
}

type PairIter = Box<dyn Iterator<Item = (Key, Value)> + Send>;

/// Source backed by an iterator that can only be walked once
struct Once {
    slot: Mutex<Option<PairIter>>,
}

impl fmt::Debug for Once {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let consumed = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none();
        f.debug_struct("Once").field("consumed", &consumed).finish()
    }
}

impl Traverse for Once {
    fn traverse(&self) -> Box<dyn Iterator<Item = (Key, Value)> + '_> {
        let taken = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match taken {
            Some(iter) => iter,
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Shared handle to a [`Traverse`] source
#[derive(Debug, Clone)]
pub struct Traversable {
    source: Arc<dyn Traverse>,
}

impl Traversable {
    pub fn new(source: impl Traverse + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_arc(source: Arc<dyn Traverse>) -> Self {
        Self { source }
    }

    /// Wrap a lazily-evaluated iterator; it is pulled only when traversed
    pub fn once<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
        I::IntoIter: Send + 'static,
    {
        let iter: PairIter = Box::new(iter.into_iter());
        Self::new(Once {
            slot: Mutex::new(Some(iter)),
        })
    }

    /// Start a pass over the source
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Key, Value)> + '_> {
        self.source.traverse()
    }

    /// True when both handles refer to the same source
    pub fn ptr_eq(a: &Traversable, b: &Traversable) -> bool {
        Arc::ptr_eq(&a.source, &b.source)
    }
}

impl PartialEq for Traversable {
    fn eq(&self, other: &Self) -> bool {
        Traversable::ptr_eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_source_is_repeatable() {
        let traversable = Traversable::new(Array::from(vec!["x", "y"]));
        assert_eq!(traversable.iter().count(), 2);
        assert_eq!(traversable.iter().count(), 2);
    }

    #[test]
    fn test_once_source_yields_a_single_pass() {
        let traversable = Traversable::once((0..3).map(|i| (Key::Index(i), Value::Integer(i * 10))));
        let first: Vec<_> = traversable.iter().collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2], (Key::Index(2), Value::Integer(20)));
        assert_eq!(traversable.iter().count(), 0);
    }

    #[test]
    fn test_once_source_is_lazy() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulled);
        let traversable = Traversable::once((0..4).map(move |i| {
            counter.fetch_add(1, Ordering::SeqCst);
            (Key::Index(i), Value::Integer(i))
        }));

        let handle = traversable.clone();
        assert_eq!(pulled.load(Ordering::SeqCst), 0);
        assert_eq!(handle.iter().take(2).count(), 2);
        assert_eq!(pulled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Traversable::new(Array::new());
        let b = Traversable::new(Array::new());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_reports_consumption() {
        let traversable = Traversable::once(std::iter::empty::<(Key, Value)>());
        assert!(format!("{:?}", traversable).contains("consumed: false"));
        traversable.iter().for_each(drop);
        assert!(format!("{:?}", traversable).contains("consumed: true"));
    }
}
