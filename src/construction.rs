//! This module defines how sequences come into being: by hand from the primitive constructors, from generators, or from existing sources, in which case the cheapest representation for the source is chosen.
//!
//! - random-access buffers (arrays, vectors) become windows without copying, text becomes a window on its decoded characters,
//! - general iterators are pulled in chunks of [`CHUNK_SIZE`] elements,
//! - sources without a bulk-pull shape (transition functions, suppliers) get one lazy node per step,
//! - sequences are returned unchanged.

use crate::sequences::chunks::{Chunk, ChunkedCons, CHUNK_SIZE};
use crate::sequences::cons::Cons;
use crate::sequences::lazy::LazySeq;
use crate::sequences::windows::{Buffer, Window};
use crate::{Element, Seq};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::trace;

impl<T> Seq<T> {
    /// The empty sequence.
    pub const fn empty() -> Self {
        Seq::Empty
    }

    /// Prepend `first` to `rest` strictly.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let seq = Seq::cons(1, Seq::cons(2, Seq::empty()));
    /// assert_eq!(seq.to_vec(), vec![1, 2]);
    /// ```
    pub fn cons(first: T, rest: Seq<T>) -> Self {
        Seq::Cons(Arc::new(Cons::new(first, rest)))
    }

    /// Defer the computation of a sequence to the first time it is observed.
    /// The generator `f` runs at most once unless it panics, in which case it is run again on the next observation.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> Seq<T> + Send + Sync + 'static,
    {
        Seq::Lazy(Arc::new(LazySeq::new(f)))
    }
}

impl<T: Element> Seq<T> {
    /// View the elements of `items` in order; the vector is moved, not copied.
    pub fn from_vec(items: Vec<T>) -> Self {
        Window::whole(Arc::new(items))
    }

    /// View the elements of a shared array in order without copying them.
    pub fn from_arc(items: Arc<[T]>) -> Self {
        Window::whole(Arc::new(items))
    }

    /// View the elements `[from, to)` of a shared array without copying them.
    pub fn from_arc_range(items: Arc<[T]>, from: usize, to: usize) -> Self {
        Window::seq(Arc::new(items), from, to)
    }

    /// Pull the elements of `source` lazily, [`CHUNK_SIZE`] at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::{Seq, Sequence};
    ///
    /// let naturals = Seq::from_iterator(0u64..);
    /// assert_eq!(naturals.drop(1500).first(), Some(1500));
    /// ```
    pub fn from_iterator<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Seq::from_iterator_chunked(source, CHUNK_SIZE)
    }

    /// Pull the elements of `source` lazily, `size` at a time (at least one).
    pub fn from_iterator_chunked<I>(source: I, size: usize) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        pull_chunks(Arc::new(Mutex::new(source.into_iter())), size.max(1))
    }

    /// Create the infinite sequence `seed, f(seed), f(f(seed)), ...`.
    ///
    /// Each step is a lazy node which calls `f` on the previous element, so no node ever refers back to an earlier one.
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        iterate(seed, Arc::new(f))
    }

    /// Create the infinite sequence of a certain constant.
    ///
    /// # Examples
    ///
    /// Creating an infinite sequence of `true`s:
    ///
    /// ```
    /// let trues = lazyseq::Seq::constant(true);
    /// assert!(trues.take(3).every(|b| *b));
    /// ```
    pub fn constant(x: T) -> Self {
        Seq::cons(x.clone(), Seq::lazy(move || Seq::constant(x.clone())))
    }

    /// Create the infinite sequence of the values supplied by successive calls of `f`.
    pub fn generate<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        generate(Arc::new(f))
    }
}

impl Seq<char> {
    /// View the characters of `text`.
    ///
    /// The characters are decoded once into a shared array, so every later view on them (rest, take, drop, nth) is constant time.
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let chars: Arc<[char]> = text.as_ref().chars().collect();
        Seq::from_arc(chars)
    }
}

impl Seq<i64> {
    /// The integers `[start, end)`, pulled in chunks.
    pub fn range(start: i64, end: i64) -> Self {
        Seq::from_iterator(start..end)
    }
}

impl<K: Element, V: Element> Seq<(K, V)> {
    /// The entries of a map (or any stream of key/value pairs), pulled in chunks.
    pub fn from_map<M>(map: M) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
        M::IntoIter: Send + 'static,
    {
        Seq::from_iterator(map)
    }
}

fn pull_chunks<T, I>(source: Arc<Mutex<I>>, size: usize) -> Seq<T>
where
    T: Element,
    I: Iterator<Item = T> + Send + 'static,
{
    Seq::lazy(move || {
        let items: Vec<T> = {
            let mut iter = source.lock().unwrap_or_else(PoisonError::into_inner);
            iter.by_ref().take(size).collect()
        };
        trace!(len = items.len(), "fetched chunk");
        if items.is_empty() {
            Seq::Empty
        } else {
            ChunkedCons::seq(Chunk::new(items), pull_chunks(source.clone(), size))
        }
    })
}

fn iterate<T, F>(x: T, f: Arc<F>) -> Seq<T>
where
    T: Element,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    let current = x.clone();
    Seq::cons(x, Seq::lazy(move || iterate(f(&current), f.clone())))
}

fn generate<T, F>(f: Arc<F>) -> Seq<T>
where
    T: Element,
    F: Fn() -> T + Send + Sync + 'static,
{
    Seq::lazy(move || Seq::cons(f(), generate(f.clone())))
}

/// A characterization of sources which can be turned into a [`Seq`] by choosing the cheapest representation for them.
pub trait IntoSeq {
    type Item;
    fn into_seq(self) -> Seq<Self::Item>;
}

/// Turn `source` into a sequence.
///
/// # Examples
///
/// ```
/// use lazyseq::{seq, Sequence};
///
/// assert_eq!(seq(vec![1, 2]).to_vec(), vec![1, 2]);
/// assert_eq!(seq("ab").to_vec(), vec!['a', 'b']);
/// assert!(seq(None::<Vec<u8>>).is_empty());
/// ```
pub fn seq<S: IntoSeq>(source: S) -> Seq<S::Item> {
    source.into_seq()
}

impl<T> IntoSeq for Seq<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        self
    }
}

impl<S: IntoSeq> IntoSeq for Option<S> {
    type Item = S::Item;

    fn into_seq(self) -> Seq<S::Item> {
        match self {
            Some(source) => source.into_seq(),
            None => Seq::Empty,
        }
    }
}

impl<T: Element> IntoSeq for Vec<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from_vec(self)
    }
}

impl<T: Element> IntoSeq for Arc<[T]> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from_arc(self)
    }
}

impl<T: Element> IntoSeq for &[T] {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from_vec(self.to_vec())
    }
}

impl<T: Element, const N: usize> IntoSeq for [T; N] {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from_vec(Vec::from(self))
    }
}

impl IntoSeq for String {
    type Item = char;

    fn into_seq(self) -> Seq<char> {
        Seq::from_text(self)
    }
}

impl IntoSeq for &str {
    type Item = char;

    fn into_seq(self) -> Seq<char> {
        Seq::from_text(self)
    }
}

impl<K: Element, V: Element, S> IntoSeq for HashMap<K, V, S> {
    type Item = (K, V);

    fn into_seq(self) -> Seq<(K, V)> {
        Seq::from_map(self)
    }
}

impl<K: Element, V: Element> IntoSeq for BTreeMap<K, V> {
    type Item = (K, V);

    fn into_seq(self) -> Seq<(K, V)> {
        Seq::from_map(self)
    }
}

impl<T: Element, S> IntoSeq for HashSet<T, S> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from_iterator(self)
    }
}

#[cfg(feature = "std")]
impl<T: Element> IntoSeq for crossbeam::channel::Receiver<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        Seq::from_channel(self)
    }
}

impl<T: Element> FromIterator<T> for Seq<T> {
    /// Collect eagerly into a window; use [`Seq::from_iterator`] to pull lazily instead.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::from_vec(iter.into_iter().collect())
    }
}

/// Make a buffer implementation usable as the backing of a window.
impl<T: Element> From<Arc<dyn Buffer<T>>> for Seq<T> {
    fn from(buffer: Arc<dyn Buffer<T>>) -> Self {
        Window::whole(buffer)
    }
}
