//! This module provides the strict representation of non-empty sequences as realized pairs.

use super::Sequence;
use crate::{dismantle, Seq};

use std::mem;

/// [`Cons<T>`] is a computed pair of a first element and the rest of a sequence, where the rest can be any representation.
pub struct Cons<T> {
    first: T,
    rest: Seq<T>,
}

impl<T> Cons<T> {
    pub fn new(first: T, rest: Seq<T>) -> Self {
        Cons { first, rest }
    }

    /// Borrow the first element.
    pub fn head(&self) -> &T {
        &self.first
    }

    /// Borrow the rest.
    pub fn tail(&self) -> &Seq<T> {
        &self.rest
    }

    pub(crate) fn take_rest(&mut self) -> Seq<T> {
        mem::take(&mut self.rest)
    }
}

impl<T: Clone> Sequence<T> for Cons<T> {
    fn first(&self) -> Option<T> {
        Some(self.first.clone())
    }

    fn rest(&self) -> Seq<T> {
        self.rest.clone()
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl<T> Drop for Cons<T> {
    fn drop(&mut self) {
        dismantle(self.take_rest());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head() {
        let cons = Cons::new(true, Seq::empty());
        assert!(*cons.head());
        assert_eq!(cons.first(), Some(true));
    }

    #[test]
    fn test_tail() {
        let cons = Cons::new(1, Seq::cons(2, Seq::empty()));
        assert_eq!(cons.tail().first(), Some(2));
        assert_eq!(cons.rest().first(), Some(2));
        assert!(!cons.is_empty());
        assert!(cons.is_realized());
    }

    #[test]
    fn test_nullable_elements() {
        let cons = Cons::new(None::<u8>, Seq::empty());
        assert_eq!(cons.first(), Some(None));
    }
}
