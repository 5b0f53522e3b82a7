//! This module defines the operations which consume sequences eagerly: counting, searching, folding and converting into collections.
//!
//! All of them walk the sequence up to the point the answer is known. On an infinite sequence the ones which need every element (counting, collecting, folding, finding the last or extreme element) do not terminate.

use crate::error::{Result, SeqError};
use crate::sequences::Sequence;
use crate::Seq;

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use tracing::debug;

impl<T: Clone> Seq<T> {
    /// The number of elements. Windows and chunks are counted without walking them element by element.
    pub fn count(&self) -> usize {
        let mut seq = self.clone();
        let mut n = 0;
        loop {
            let next = match &seq {
                Seq::Empty => return n,
                Seq::Window(window) => return n + window.count(),
                Seq::Chunked(chunked) => {
                    n += chunked.chunk().count();
                    chunked.more().clone()
                }
                Seq::Lazy(node) => node.realize().clone(),
                Seq::Cons(cell) => {
                    n += 1;
                    cell.tail().clone()
                }
            };
            seq = next;
        }
    }

    /// Collect the elements into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Collect the elements into a set.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Combine the elements from left to right with `f`, starting with the first element.
    /// The empty sequence reduces to [`None`].
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.iter().reduce(f)
    }

    /// Combine the elements from left to right with `f`, starting with `init`.
    pub fn fold<U, F>(&self, init: U, f: F) -> U
    where
        F: FnMut(U, T) -> U,
    {
        self.iter().fold(init, f)
    }

    /// Call `f` on each element for its side effects.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(f)
    }

    /// Decide whether some element satisfies `p`, stopping at the first one which does.
    pub fn some<P>(&self, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|x| p(&x))
    }

    /// Decide whether every element satisfies `p`, stopping at the first one which does not.
    pub fn every<P>(&self, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|x| p(&x))
    }

    /// Decide whether no element satisfies `p`.
    pub fn not_any<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.some(p)
    }

    /// The first element satisfying `p`.
    pub fn find_first<P>(&self, mut p: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|x| p(x))
    }

    /// The greatest element according to `comp`; the last one of several equally great elements.
    pub fn max_by<F>(&self, comp: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().max_by(comp)
    }

    /// The least element according to `comp`; the first one of several equally small elements.
    pub fn min_by<F>(&self, comp: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().min_by(comp)
    }

    /// The element for which `f` gives the greatest key.
    pub fn max_by_key<K, F>(&self, f: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.iter().max_by_key(f)
    }

    /// The element for which `f` gives the least key.
    pub fn min_by_key<K, F>(&self, f: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.iter().min_by_key(f)
    }

    /// The element at index `i` (counting from zero).
    pub fn nth(&self, i: usize) -> Option<T> {
        crate::combinators::nthrest(self, i).first()
    }

    /// The element at index `i`, or `default` if `self` is too short.
    pub fn nth_or(&self, i: usize, default: T) -> T {
        self.nth(i).unwrap_or(default)
    }

    pub fn second(&self) -> Option<T> {
        self.nth(1)
    }

    pub fn last(&self) -> Option<T> {
        self.iter().last()
    }

    /// Concatenate the textual representations of the elements with `sep` between each two of them.
    pub fn join(&self, sep: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(&x.to_string());
        }
        out
    }

    /// Build a map from the keys and values extracted from the elements.
    ///
    /// # Errors
    ///
    /// [`SeqError::KeyCollision`] naming the first key extracted from two elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::{Seq, SeqError};
    ///
    /// let words = Seq::from_vec(vec!["apple", "avocado"]);
    /// let by_initial = words.to_map(|w| w.chars().next(), |w| w.len());
    /// assert!(matches!(by_initial, Err(SeqError::KeyCollision { .. })));
    /// ```
    pub fn to_map<K, V, KF, VF>(&self, key: KF, value: VF) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
    {
        insert_all(self.iter(), key, value, |k, _, _| {
            debug!(key = ?k, "duplicate key while building map");
            Err(SeqError::KeyCollision {
                key: format!("{:?}", k),
            })
        })
    }

    /// Build a map from the keys and values extracted from the elements, combining the values of a duplicate key with `merge(existing, incoming)`.
    pub fn to_map_merge<K, V, KF, VF, MF>(&self, key: KF, value: VF, mut merge: MF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
        MF: FnMut(V, V) -> V,
    {
        let merged: std::result::Result<_, std::convert::Infallible> =
            insert_all(self.iter(), key, value, |_, existing, incoming| {
                Ok(merge(existing, incoming))
            });
        match merged {
            Ok(map) => map,
            Err(never) => match never {},
        }
    }
}

impl<T: Clone + PairLike> Seq<T> {
    /// Build a map from pair-like elements.
    ///
    /// # Errors
    ///
    /// - [`SeqError::TypeMismatch`] if an element is not a pair.
    /// - [`SeqError::KeyCollision`] naming the first duplicate key.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let map = Seq::from_vec(vec![("x", 1), ("y", 2)]).to_map_pairs().unwrap();
    /// assert_eq!(map["y"], 2);
    /// ```
    pub fn to_map_pairs(&self) -> Result<HashMap<T::Key, T::Value>>
    where
        T::Key: Eq + Hash + Debug,
    {
        let pairs = self.iter().map(PairLike::into_pair).collect::<Result<Vec<_>>>()?;
        insert_all(
            pairs.into_iter(),
            |(k, _): &(T::Key, T::Value)| k.clone(),
            |(_, v): &(T::Key, T::Value)| v.clone(),
            |k, _, _| {
                debug!(key = ?k, "duplicate key while building map");
                Err(SeqError::KeyCollision {
                    key: format!("{:?}", k),
                })
            },
        )
    }

    /// Build a map from pair-like elements, combining the values of a duplicate key with `merge(existing, incoming)`.
    ///
    /// # Errors
    ///
    /// [`SeqError::TypeMismatch`] if an element is not a pair.
    pub fn to_map_pairs_merge<MF>(&self, mut merge: MF) -> Result<HashMap<T::Key, T::Value>>
    where
        T::Key: Eq + Hash,
        MF: FnMut(T::Value, T::Value) -> T::Value,
    {
        let mut map = HashMap::new();
        for x in self.iter() {
            let (k, v) = x.into_pair()?;
            let v = match map.remove(&k) {
                Some(existing) => merge(existing, v),
                None => v,
            };
            map.insert(k, v);
        }
        Ok(map)
    }
}

/// Insert the extracted associations one by one, letting `collide(key, existing, incoming)` decide the value of a key seen before.
fn insert_all<T, K, V, E, I, KF, VF, CF>(
    items: I,
    mut key: KF,
    mut value: VF,
    mut collide: CF,
) -> std::result::Result<HashMap<K, V>, E>
where
    K: Eq + Hash,
    I: Iterator<Item = T>,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
    CF: FnMut(&K, V, V) -> std::result::Result<V, E>,
{
    let mut map = HashMap::new();
    for x in items {
        let k = key(&x);
        let incoming = value(&x);
        let v = match map.remove(&k) {
            Some(existing) => collide(&k, existing, incoming)?,
            None => incoming,
        };
        map.insert(k, v);
    }
    Ok(map)
}

/// A characterization of elements which can be viewed as key/value pairs.
pub trait PairLike {
    type Key: Clone;
    type Value: Clone;
    /// Split `self` into key and value, or describe what `self` is instead of a pair.
    fn into_pair(self) -> Result<(Self::Key, Self::Value)>;
}

impl<K: Clone, V: Clone> PairLike for (K, V) {
    type Key = K;
    type Value = V;

    fn into_pair(self) -> Result<(K, V)> {
        Ok(self)
    }
}

impl<X: Clone> PairLike for [X; 2] {
    type Key = X;
    type Value = X;

    fn into_pair(self) -> Result<(X, X)> {
        let [k, v] = self;
        Ok((k, v))
    }
}

impl<X: Clone> PairLike for Vec<X> {
    type Key = X;
    type Value = X;

    fn into_pair(self) -> Result<(X, X)> {
        let found = self.len();
        let mut items = self.into_iter();
        match (items.next(), items.next(), items.next()) {
            (Some(k), Some(v), None) => Ok((k, v)),
            _ => Err(SeqError::TypeMismatch {
                expected: "pair",
                found: format!("vector of {} elements", found),
            }),
        }
    }
}

impl<X: Clone> PairLike for Seq<X> {
    type Key = X;
    type Value = X;

    fn into_pair(self) -> Result<(X, X)> {
        let mut items = self.iter();
        match (items.next(), items.next(), items.next()) {
            (Some(k), Some(v), None) => Ok((k, v)),
            _ => Err(SeqError::TypeMismatch {
                expected: "pair",
                found: format!("sequence of {} elements", self.count()),
            }),
        }
    }
}
