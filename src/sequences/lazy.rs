//! This module provides the lazy representation of sequences: a generator which is run the first time the sequence is observed and whose result is memoized.
//!
//! Realization is safe under concurrent first access. Exactly one caller runs the generator while the others block until the result is there, after which every access is a plain read.
//! If the generator panics the node stays unrealized and the next access runs the generator again.

use super::Sequence;
use crate::{dismantle, Seq};

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::trace;

/// [`Thunk<T>`] types re-runnable generators of sequences of type `T`.
type Thunk<T> = dyn Fn() -> Seq<T> + Send + Sync;

/// [`LazySeq<T>`] is a sequence which is computed on demand.
pub struct LazySeq<T> {
    /// generator, dropped as soon as the memo is written
    thunk: Mutex<Option<Box<Thunk<T>>>>,
    /// write-once result, never itself a lazy sequence
    memo: OnceLock<Seq<T>>,
}

impl<T> LazySeq<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Seq<T> + Send + Sync + 'static,
    {
        LazySeq {
            thunk: Mutex::new(Some(Box::new(f))),
            memo: OnceLock::new(),
        }
    }

    /// Run the generator unless that happened before and return the memoized result.
    ///
    /// Results which are themselves lazy are realized transitively so that the memo always holds a realized representation.
    pub fn realize(&self) -> &Seq<T> {
        self.memo.get_or_init(|| {
            let mut thunk = self.thunk.lock().unwrap_or_else(PoisonError::into_inner);
            let mut seq = match thunk.as_ref() {
                Some(f) => f(),
                None => Seq::Empty,
            };
            while let Seq::Lazy(node) = seq {
                seq = node.realize().clone();
            }
            *thunk = None;
            trace!("realized lazy sequence node");
            seq
        })
    }

    pub fn is_realized(&self) -> bool {
        self.memo.get().is_some()
    }

    pub(crate) fn take_memo(&mut self) -> Seq<T> {
        self.memo.take().unwrap_or_default()
    }
}

impl<T: Clone> Sequence<T> for LazySeq<T> {
    fn first(&self) -> Option<T> {
        self.realize().first()
    }

    fn rest(&self) -> Seq<T> {
        self.realize().rest()
    }

    fn is_empty(&self) -> bool {
        self.realize().is_empty()
    }

    fn is_realized(&self) -> bool {
        LazySeq::is_realized(self)
    }
}

impl<T> Drop for LazySeq<T> {
    fn drop(&mut self) {
        dismantle(self.take_memo());
    }
}

impl<T> fmt::Debug for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_realized() {
            write!(f, "LazySeq(realized)")
        } else {
            write!(f, "LazySeq(pending)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::panic;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_realize_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let node = LazySeq::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Seq::cons(1, Seq::empty())
        });

        assert!(!node.is_realized());
        assert_eq!(node.first(), Some(1));
        assert!(node.is_realized());
        assert!(node.rest().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_realize_flattens_nested_lazy() {
        let node = LazySeq::new(|| Seq::lazy(|| Seq::lazy(|| Seq::cons('x', Seq::empty()))));
        assert!(matches!(node.realize(), Seq::Cons(_)));
    }

    #[test]
    fn test_realize_empty() {
        let node: LazySeq<u8> = LazySeq::new(Seq::empty);
        assert!(node.is_empty());
        assert!(matches!(node.realize(), Seq::Empty));
    }

    #[test]
    fn test_failed_generator_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let node = LazySeq::new(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("first attempt fails");
            }
            Seq::cons(7, Seq::empty())
        });

        let failed = panic::catch_unwind(panic::AssertUnwindSafe(|| node.first()));
        assert!(failed.is_err());
        assert!(!node.is_realized());

        assert_eq!(node.first(), Some(7));
        assert_eq!(node.first(), Some(7));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug() {
        let node = LazySeq::new(|| Seq::cons(1, Seq::empty()));
        assert_eq!(format!("{:?}", node), "LazySeq(pending)");
        node.realize();
        assert_eq!(format!("{:?}", node), "LazySeq(realized)");
    }
}
