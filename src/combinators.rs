//! This module defines the transformations which turn existing sequences into new ones.
//!
//! Every transformation is defined in terms of [`first`](`Sequence::first`), [`rest`](`Sequence::rest`) and [`is_empty`](`Sequence::is_empty`) only, so it works for any representation.
//! Some representations take shortcuts (a window drops or takes elements by moving its bounds, a chunk is skipped as a whole) which never change the result.
//! Unless documented otherwise the transformations are lazy: nothing is computed before the result is observed, and only as much as is observed.

use crate::sequences::Sequence;
use crate::{Element, IntoSeq, Seq};

use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::Arc;

/// [`Tail<T>`] types the deferred continuation of a concatenation.
type Tail<T> = dyn Fn() -> Seq<T> + Send + Sync;

impl<T: Element> Seq<T> {
    /// Keep only the elements satisfying `p`.
    /// Leading elements which do not satisfy `p` are skipped when the result is observed, no earlier.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let evens = Seq::iterate(0, |n| n + 1).filter(|n| n % 2 == 0);
    /// assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
    /// ```
    pub fn filter<P>(&self, p: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        filter(self.clone(), Arc::new(p))
    }

    /// Apply `f` to each element.
    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        map(self.clone(), Arc::new(f))
    }

    /// Apply `f` to the elements of `self` and `other` pairwise; the result ends as soon as either side does.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let sums = Seq::from_vec(vec![1, 2, 3]).map_with(&Seq::constant(10), |a, b| a + b);
    /// assert_eq!(sums.to_vec(), vec![11, 12, 13]);
    /// ```
    pub fn map_with<U, V, F>(&self, other: &Seq<U>, f: F) -> Seq<V>
    where
        U: Element,
        V: Element,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        map_with(self.clone(), other.clone(), Arc::new(f))
    }

    /// Pair the elements of `self` and `other`; the result ends as soon as either side does.
    pub fn zip<U: Element>(&self, other: &Seq<U>) -> Seq<(T, U)> {
        self.map_with(other, |a, b| (a, b))
    }

    /// Apply `f` to each element and concatenate the resulting sequences.
    /// Empty results contribute nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let repeated = Seq::from_vec(vec![0usize, 1, 2]).mapcat(|n| vec![n; n]);
    /// assert_eq!(repeated.to_vec(), vec![1, 2, 2]);
    /// ```
    pub fn mapcat<S, F>(&self, f: F) -> Seq<S::Item>
    where
        S: IntoSeq,
        S::Item: Element,
        F: Fn(T) -> S + Send + Sync + 'static,
    {
        mapcat(self.clone(), Arc::new(move |x: T| f(x).into_seq()))
    }

    /// Apply `f` to each element and keep the values it returns, dropping the [`None`]s.
    pub fn keep<U, F>(&self, f: F) -> Seq<U>
    where
        U: Element,
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
    {
        keep(self.clone(), Arc::new(f))
    }

    /// The elements of `self` followed by the elements of `other`.
    pub fn concat(&self, other: &Seq<T>) -> Seq<T> {
        let other = other.clone();
        concat(self.clone(), Arc::new(move || other.clone()))
    }

    /// The first `n` elements (or fewer if `self` is shorter).
    ///
    /// `take(1)` observes the first element right away and answers a strict pair.
    /// Longer prefixes stay lazy, but their last pair is strict.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// assert_eq!(Seq::constant('a').take(2).to_vec(), vec!['a', 'a']);
    /// assert!(Seq::from_vec(vec![1, 2]).take(0).to_vec().is_empty());
    /// ```
    pub fn take(&self, n: usize) -> Seq<T> {
        match self {
            _ if n == 0 => Seq::Empty,
            _ if n == 1 => match self.first() {
                Some(x) => Seq::cons(x, Seq::Empty),
                None => Seq::Empty,
            },
            Seq::Window(window) => window.take(n),
            _ => take(self.clone(), n),
        }
    }

    /// Everything but the first `n` elements.
    pub fn drop(&self, n: usize) -> Seq<T> {
        match self {
            _ if n == 0 => self.clone(),
            Seq::Window(window) => window.drop(n),
            _ => {
                let seq = self.clone();
                Seq::lazy(move || nthrest(&seq, n))
            }
        }
    }

    /// The leading elements satisfying `p`.
    pub fn take_while<P>(&self, p: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        take_while(self.clone(), Arc::new(p))
    }

    /// Everything from the first element not satisfying `p` on.
    pub fn drop_while<P>(&self, p: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let seq = self.clone();
        Seq::lazy(move || {
            let mut seq = seq.clone();
            while let Some(x) = seq.first() {
                if !p(&x) {
                    break;
                }
                seq = seq.rest();
            }
            seq
        })
    }

    /// Groups of `n` elements whose starts are `step` elements apart.
    ///
    /// A `step` smaller than `n` gives overlapping groups, a larger one leaves gaps.
    /// A trailing group with fewer than `n` elements is dropped.
    /// With `n == 0` there is one empty group per position (and a `step` of zero never advances).
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let pairs = Seq::from_vec(vec![1, 2, 3, 4, 5]).partition(2, 2);
    /// assert_eq!(pairs.map(|group| group.to_vec()).to_vec(), vec![vec![1, 2], vec![3, 4]]);
    ///
    /// let windows = Seq::from_vec(vec![1, 2, 3]).partition(2, 1);
    /// assert_eq!(windows.map(|group| group.to_vec()).to_vec(), vec![vec![1, 2], vec![2, 3]]);
    /// ```
    pub fn partition(&self, n: usize, step: usize) -> Seq<Seq<T>> {
        partition(self.clone(), n, step, None)
    }

    /// Like [`partition`](`Seq::partition`), but a trailing incomplete group is topped up from `pad` and kept.
    /// If `pad` runs out, the group is kept incomplete.
    pub fn partition_pad(&self, n: usize, step: usize, pad: &Seq<T>) -> Seq<Seq<T>> {
        partition(self.clone(), n, step, Some(pad.clone()))
    }

    /// Like [`partition`](`Seq::partition`), but a trailing incomplete group is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let groups = Seq::from_vec(vec![1, 2, 3, 4, 5]).partition_all(2, 2);
    /// assert_eq!(groups.map(|group| group.to_vec()).to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    pub fn partition_all(&self, n: usize, step: usize) -> Seq<Seq<T>> {
        self.partition_pad(n, step, &Seq::Empty)
    }

    /// The elements in order of first occurrence, without repetitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let letters = Seq::from_text("acabbd").distinct();
    /// assert_eq!(letters.to_vec(), vec!['a', 'c', 'b', 'd']);
    /// ```
    pub fn distinct(&self) -> Seq<T>
    where
        T: Eq + Hash,
    {
        distinct(self.clone(), im::HashSet::new())
    }

    /// The running results of folding `f` over `self`, starting with the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let sums = Seq::from_vec(vec![1, 2, 3]).reductions(|a, b| a + b);
    /// assert_eq!(sums.to_vec(), vec![1, 3, 6]);
    /// ```
    pub fn reductions<F>(&self, f: F) -> Seq<T>
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let seq = self.clone();
        Seq::lazy(move || match seq.first() {
            None => Seq::Empty,
            Some(x) => reductions(x, seq.rest(), f.clone()),
        })
    }

    /// The running results of folding `f` over `self`, starting with `init` (even if `self` is empty).
    pub fn reductions_from<U, F>(&self, init: U, f: F) -> Seq<U>
    where
        U: Element,
        F: Fn(U, T) -> U + Send + Sync + 'static,
    {
        reductions(init, self.clone(), Arc::new(f))
    }

    /// The elements with `sep` between each two of them.
    pub fn interpose(&self, sep: T) -> Seq<T> {
        interpose(self.clone(), sep)
    }

    /// The elements in ascending order.
    ///
    /// The result is lazy, but observing it realizes and buffers all of `self`.
    pub fn sorted(&self) -> Seq<T>
    where
        T: Ord,
    {
        self.sorted_by(T::cmp)
    }

    /// The elements ordered by `comp`, keeping the order of equal elements.
    ///
    /// The result is lazy, but observing it realizes and buffers all of `self`.
    pub fn sorted_by<F>(&self, comp: F) -> Seq<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let seq = self.clone();
        Seq::lazy(move || {
            let mut items = seq.to_vec();
            items.sort_by(&comp);
            Seq::from_vec(items)
        })
    }

    /// The elements ordered by the keys `f` extracts.
    pub fn sorted_by_key<K, F>(&self, f: F) -> Seq<T>
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.sorted_by(move |a, b| f(a).cmp(&f(b)))
    }

    /// The elements in reverse order, as a chain of strict pairs.
    ///
    /// This realizes all of `self` right away.
    pub fn reverse(&self) -> Seq<T> {
        self.iter().fold(Seq::Empty, |acc, x| Seq::cons(x, acc))
    }
}

fn filter<T, P>(seq: Seq<T>, p: Arc<P>) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Seq::lazy(move || {
        let mut seq = seq.clone();
        while let Some(x) = seq.first() {
            let rest = seq.rest();
            if p(&x) {
                return Seq::cons(x, filter(rest, p.clone()));
            }
            seq = rest;
        }
        Seq::Empty
    })
}

fn map<T, U, F>(seq: Seq<T>, f: Arc<F>) -> Seq<U>
where
    T: Element,
    U: Element,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Seq::lazy(move || match seq.first() {
        None => Seq::Empty,
        Some(x) => Seq::cons(f(x), map(seq.rest(), f.clone())),
    })
}

fn map_with<T, U, V, F>(left: Seq<T>, right: Seq<U>, f: Arc<F>) -> Seq<V>
where
    T: Element,
    U: Element,
    V: Element,
    F: Fn(T, U) -> V + Send + Sync + 'static,
{
    Seq::lazy(move || match (left.first(), right.first()) {
        (Some(a), Some(b)) => Seq::cons(f(a, b), map_with(left.rest(), right.rest(), f.clone())),
        _ => Seq::Empty,
    })
}

fn mapcat<T, U, F>(seq: Seq<T>, f: Arc<F>) -> Seq<U>
where
    T: Element,
    U: Element,
    F: Fn(T) -> Seq<U> + Send + Sync + 'static,
{
    Seq::lazy(move || {
        let mut seq = seq.clone();
        while let Some(x) = seq.first() {
            let rest = seq.rest();
            let items = f(x);
            if !items.is_empty() {
                let f = f.clone();
                return concat(items, Arc::new(move || mapcat(rest.clone(), f.clone())));
            }
            seq = rest;
        }
        Seq::Empty
    })
}

fn keep<T, U, F>(seq: Seq<T>, f: Arc<F>) -> Seq<U>
where
    T: Element,
    U: Element,
    F: Fn(T) -> Option<U> + Send + Sync + 'static,
{
    Seq::lazy(move || {
        let mut seq = seq.clone();
        while let Some(x) = seq.first() {
            let rest = seq.rest();
            if let Some(y) = f(x) {
                return Seq::cons(y, keep(rest, f.clone()));
            }
            seq = rest;
        }
        Seq::Empty
    })
}

fn concat<T: Element>(seq: Seq<T>, tail: Arc<Tail<T>>) -> Seq<T> {
    Seq::lazy(move || match seq.first() {
        None => tail(),
        Some(x) => Seq::cons(x, concat(seq.rest(), tail.clone())),
    })
}

fn take<T: Element>(seq: Seq<T>, n: usize) -> Seq<T> {
    Seq::lazy(move || match seq.first() {
        None => Seq::Empty,
        Some(x) => Seq::cons(x, seq.rest().take(n - 1)),
    })
}

/// Walk `n` elements into `seq`, skipping windows and chunks as a whole where possible.
pub(crate) fn nthrest<T: Clone>(seq: &Seq<T>, n: usize) -> Seq<T> {
    let mut seq = seq.clone();
    let mut n = n;
    while n > 0 {
        let next = match &seq {
            Seq::Empty => return Seq::Empty,
            Seq::Window(window) => return window.drop(n),
            Seq::Chunked(chunked) => {
                let count = chunked.chunk().count();
                if n >= count {
                    n -= count;
                    chunked.more().clone()
                } else {
                    return chunked.skip(n);
                }
            }
            Seq::Lazy(node) => node.realize().clone(),
            Seq::Cons(cell) => {
                n -= 1;
                cell.tail().clone()
            }
        };
        seq = next;
    }
    seq
}

fn take_while<T, P>(seq: Seq<T>, p: Arc<P>) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Seq::lazy(move || match seq.first() {
        Some(x) if p(&x) => Seq::cons(x, take_while(seq.rest(), p.clone())),
        _ => Seq::Empty,
    })
}

fn partition<T: Element>(seq: Seq<T>, n: usize, step: usize, pad: Option<Seq<T>>) -> Seq<Seq<T>> {
    Seq::lazy(move || {
        if seq.is_empty() {
            return Seq::Empty;
        }
        let mut group: Vec<T> = seq.iter().take(n).collect();
        if group.len() == n {
            let rest = nthrest(&seq, step);
            return Seq::cons(Seq::from_vec(group), partition(rest, n, step, pad.clone()));
        }
        match &pad {
            None => Seq::Empty,
            Some(pad) => {
                group.extend(pad.iter().take(n - group.len()));
                Seq::cons(Seq::from_vec(group), Seq::Empty)
            }
        }
    })
}

fn distinct<T>(seq: Seq<T>, seen: im::HashSet<T>) -> Seq<T>
where
    T: Element + Eq + Hash,
{
    Seq::lazy(move || {
        let mut seq = seq.clone();
        while let Some(x) = seq.first() {
            let rest = seq.rest();
            if !seen.contains(&x) {
                let seen = seen.update(x.clone());
                return Seq::cons(x, distinct(rest, seen));
            }
            seq = rest;
        }
        Seq::Empty
    })
}

fn reductions<T, U, F>(acc: U, seq: Seq<T>, f: Arc<F>) -> Seq<U>
where
    T: Element,
    U: Element,
    F: Fn(U, T) -> U + Send + Sync + 'static,
{
    let current = acc.clone();
    Seq::cons(
        acc,
        Seq::lazy(move || match seq.first() {
            None => Seq::Empty,
            Some(x) => reductions(f(current.clone(), x), seq.rest(), f.clone()),
        }),
    )
}

fn interpose<T: Element>(seq: Seq<T>, sep: T) -> Seq<T> {
    Seq::lazy(move || match seq.first() {
        None => Seq::Empty,
        Some(x) => {
            let rest = seq.rest();
            let sep = sep.clone();
            Seq::cons(
                x,
                Seq::lazy(move || {
                    if rest.is_empty() {
                        Seq::Empty
                    } else {
                        Seq::cons(sep.clone(), interpose(rest.clone(), sep.clone()))
                    }
                }),
            )
        }
    })
}
