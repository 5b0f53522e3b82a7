//! This module defines sequences extensionally by means of a trait.
//! Additionally, it declares one submodule per representation implementing the trait.

#[cfg(feature = "std")]
pub mod channels;

pub mod chunks;

pub mod cons;

pub mod lazy;

pub mod windows;

use crate::Seq;

use std::fmt::Debug;

/// A characterization of sequences of some type `T`: a sequence of `T` is an object from which one can observe something of type `T` (the first element, if the sequence is not empty) or another sequence of `T` (the rest of the sequence).
///
/// The rest of the empty sequence is the empty sequence and the rest of any other sequence is again a valid sequence, never a bare absence.
pub trait Sequence<T> {
    /// Copy the first element of `self` and return that copy or [`None`] if `self` is empty.
    fn first(&self) -> Option<T>;
    /// Throw away the first element of `self` and return what is left.
    fn rest(&self) -> Seq<T>;
    /// Decide whether `self` has no elements at all.
    fn is_empty(&self) -> bool;
    /// Decide whether the structure of `self` has already been computed.
    /// Only lazy representations can be unrealized.
    fn is_realized(&self) -> bool {
        true
    }
}

/// Print the first `n` elements of `seq` on stdout (one per line) and return what is left.
///
/// # Examples
///
/// ```
/// use lazyseq::sequences::print;
/// use lazyseq::Seq;
///
/// let rest = print(&Seq::from_vec(vec![1, 2, 3]), 2);
/// assert_eq!(rest.to_vec(), vec![3]);
/// ```
pub fn print<T: Clone + Debug>(seq: &Seq<T>, n: usize) -> Seq<T> {
    let mut seq = seq.clone();
    for _ in 0..n {
        match seq.first() {
            Some(x) => println!("{:?}", x),
            None => break,
        }
        seq = seq.rest();
    }
    seq
}
