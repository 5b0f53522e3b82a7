//! lazyseq is a library of persistent, lazily-evaluated, singly-linked sequences using rust as meta-language for the well-known `first`/`rest` view on lists.
//!
//! ## Design
//!
//! The idea of this library is to describe every sequence by just two observations:
//! One observation for reading the first element of the sequence (if there is one).
//! Another observation for obtaining the sequence of all the other elements.
//! Everything else - mapping, filtering, taking, partitioning and so on - is defined on top of these observations, so that transformations compose uniformly over finite and infinite sources alike.
//!
//! Underneath that uniform interface a [`Seq`] is one of a handful of representations, each chosen to make a particular kind of source cheap:
//!
//! <pre>
//! Empty                         the unique empty sequence
//! Cons(x, rest)                 x--rest             (already computed)
//! Lazy(|| ...)                  ?  ==realize==>  x--rest   (computed at most once)
//! Chunked([x0 x1 .. xk], rest)  x0--x1--..--xk--rest     (bulk pulled, O(1) rest)
//! Window(buffer, i, j)          buffer[i]--..--buffer[j-1] (zero copy view)
//! </pre>
//!
//! Sequences are immutable values which share structure: taking the [`rest`](`Sequence::rest`) of a sequence never copies it and a realized lazy node is shared by everybody holding it.
//! The only mutation ever happening is the one-time realization of a lazy node which is guarded so that concurrent first access still runs the generator exactly once.
//!
//! ## Usage
//!
//! To construct a [`Seq`] you either compose the constructors [`Seq::cons`], [`Seq::lazy`] and [`Seq::empty`] by hand or you let [`IntoSeq`] pick the cheapest representation for an existing source.
//! Transformations are methods on [`Seq`] and are lazy unless documented otherwise.
//! To observe sequences you can destruct them with the [`first`](`Sequence::first`)- and [`rest`](`Sequence::rest`)-methods of the sequence interface or just iterate over them.
//!
//! # Examples
//!
//! The first squares of odd numbers from an infinite source:
//!
//! ```
//! use lazyseq::Seq;
//!
//! let odd_squares = Seq::iterate(0u64, |n| n + 1)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .take(4);
//!
//! assert_eq!(odd_squares.to_vec(), vec![1, 9, 25, 49]);
//! ```
//!
//! Lazy nodes memoize their generator, so an expensive step runs at most once:
//!
//! ```
//! use lazyseq::sequences::Sequence;
//! use lazyseq::Seq;
//!
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = calls.clone();
//! let seq = Seq::lazy(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Seq::cons(42, Seq::empty())
//! });
//!
//! assert!(!seq.is_realized());
//! assert_eq!(seq.first(), Some(42));
//! assert_eq!(seq.first(), Some(42));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

pub mod combinators;

pub mod construction;

pub mod error;

pub mod folds;

pub mod list;

pub mod sequences;

pub use construction::{seq, IntoSeq};
pub use error::{Result, SeqError};
pub use folds::PairLike;
pub use list::SeqList;
pub use sequences::chunks::{Chunk, CHUNK_SIZE};
pub use sequences::Sequence;

use sequences::chunks::ChunkedCons;
use sequences::cons::Cons;
use sequences::lazy::LazySeq;
use sequences::windows::Window;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// [`Element`] collects what the lazy machinery needs from the elements of a sequence: they can be copied out of shared nodes and the nodes can be shared between threads.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}

/// [`Seq<T>`] defines persistent sequences of type `T` as a closed set of representations which all implement the same [`Sequence`]-interface.
///
/// Cloning a [`Seq`] is cheap: it only bumps a reference count (or copies a window's bounds).
pub enum Seq<T> {
    /// The empty sequence which absorbs every operation.
    Empty,
    /// An already computed pair of a first element and the rest of the sequence.
    Cons(Arc<Cons<T>>),
    /// A sequence which is computed by a generator the first time it is observed.
    Lazy(Arc<LazySeq<T>>),
    /// A bulk-pulled chunk of elements followed by the rest of the sequence.
    Chunked(ChunkedCons<T>),
    /// A view on a part of a random-access buffer.
    Window(Window<T>),
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(cell) => Self::Cons(Arc::clone(cell)),
            Self::Lazy(node) => Self::Lazy(Arc::clone(node)),
            Self::Chunked(chunked) => Self::Chunked(chunked.clone()),
            Self::Window(window) => Self::Window(window.clone()),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: Clone> Sequence<T> for Seq<T> {
    fn first(&self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Cons(cell) => cell.first(),
            Self::Lazy(node) => node.first(),
            Self::Chunked(chunked) => chunked.first(),
            Self::Window(window) => window.first(),
        }
    }

    fn rest(&self) -> Seq<T> {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(cell) => cell.rest(),
            Self::Lazy(node) => node.rest(),
            Self::Chunked(chunked) => chunked.rest(),
            Self::Window(window) => window.rest(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Lazy(node) => node.is_empty(),
            Self::Cons(_) | Self::Chunked(_) | Self::Window(_) => false,
        }
    }

    fn is_realized(&self) -> bool {
        match self {
            Self::Lazy(node) => node.is_realized(),
            _ => true,
        }
    }
}

impl<T: Clone> Seq<T> {
    /// Iterate over the elements of `self` by repeatedly taking [`first`](`Sequence::first`) and [`rest`](`Sequence::rest`).
    pub fn iter(&self) -> Iter<T> {
        Iter { seq: self.clone() }
    }

    /// Skip lazy indirections so that the result is a realized representation.
    pub(crate) fn realized(&self) -> Seq<T> {
        match self {
            Self::Lazy(node) => node.realize().clone(),
            other => other.clone(),
        }
    }
}

/// [`Iter<T>`] pulls the elements of a [`Seq<T>`] one by one.
pub struct Iter<T> {
    seq: Seq<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let x = self.seq.first()?;
        self.seq = self.seq.rest();
        Some(x)
    }
}

impl<T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter { seq: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Seq<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

/// Two sequences are equal if both are empty or if their first elements are equal and their rests are equal.
///
/// The comparison walks both sequences, so comparing two infinite sequences which never differ does not terminate.
impl<T: Clone + PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.clone();
        let mut right = other.clone();
        loop {
            match (left.first(), right.first()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => {
                    left = left.rest();
                    right = right.rest();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Clone + Eq> Eq for Seq<T> {}

/// Hashing is structural and consistent with equality across representations; the empty sequence hashes like a zero length.
impl<T: Clone + Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0usize;
        for x in self {
            x.hash(state);
            len += 1;
        }
        state.write_usize(len);
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Drop a chain of uniquely owned nodes iteratively instead of letting the compiler-generated drop glue recurse along the chain.
pub(crate) fn dismantle<T>(mut seq: Seq<T>) {
    loop {
        seq = match seq {
            Seq::Cons(cell) => match Arc::into_inner(cell) {
                Some(mut cons) => cons.take_rest(),
                None => return,
            },
            Seq::Lazy(node) => match Arc::into_inner(node) {
                Some(mut node) => node.take_memo(),
                None => return,
            },
            Seq::Chunked(chunked) => match chunked.into_more() {
                Some(more) => more,
                None => return,
            },
            Seq::Empty | Seq::Window(_) => return,
        };
    }
}

#[cfg(test)]
#[macro_export]
macro_rules! assert_head_eq {
    ($seq:expr, $x:expr) => {
        assert_eq!($crate::sequences::Sequence::first(&$seq), Some($x));
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! assert_tail_starts_with {
    ($seq:expr, [$($x:expr),* $(,)?]) => {
        let mut tail = $crate::sequences::Sequence::rest(&$seq);
        $(
            assert_eq!($crate::sequences::Sequence::first(&tail), Some($x));
            tail = $crate::sequences::Sequence::rest(&tail);
        )*
        let _ = &tail;
    };
}
