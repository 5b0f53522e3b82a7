//! This module adapts sequences to the interface of an ordered collection: index-based access, bulk export, sub-ranges and bidirectional cursors.
//!
//! Sequences are immutable, so every operation which would change the collection in place fails with [`SeqError::UnsupportedMutation`].

use crate::combinators::nthrest;
use crate::error::{Result, SeqError};
use crate::sequences::Sequence;
use crate::{Element, Seq};

/// The capacity a bulk export starts with when the length is not known up front.
const INITIAL_CAPACITY: usize = 16;

/// [`SeqList<T>`] views a [`Seq<T>`] as an ordered collection.
#[derive(Clone, Debug, PartialEq)]
pub struct SeqList<T: Clone> {
    seq: Seq<T>,
}

impl<T: Clone> From<Seq<T>> for SeqList<T> {
    fn from(seq: Seq<T>) -> Self {
        SeqList { seq }
    }
}

impl<T: Clone> SeqList<T> {
    pub fn new(seq: Seq<T>) -> Self {
        SeqList { seq }
    }

    pub fn as_seq(&self) -> &Seq<T> {
        &self.seq
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`SeqError::IndexUnavailable`] if the sequence has no element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::{Seq, SeqError, SeqList};
    ///
    /// let list = SeqList::new(Seq::from_vec(vec!['a', 'b']));
    /// assert_eq!(list.get(1), Ok('b'));
    /// assert_eq!(list.get(2), Err(SeqError::IndexUnavailable { index: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<T> {
        self.seq
            .nth(index)
            .ok_or(SeqError::IndexUnavailable { index })
    }

    /// The element at `index`, or `default` if there is none.
    pub fn get_or(&self, index: usize, default: T) -> T {
        self.seq.nth_or(index, default)
    }

    pub fn len(&self) -> usize {
        self.seq.count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.seq.some(|y| y == x)
    }

    /// The index of the first occurrence of `x`.
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.seq.iter().position(|y| y == *x)
    }

    /// The index of the last occurrence of `x`.
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.seq
            .iter()
            .enumerate()
            .filter(|(_, y)| y == x)
            .map(|(i, _)| i)
            .last()
    }

    /// Export all elements into a vector whose capacity is doubled whenever it runs full.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(INITIAL_CAPACITY);
        for x in self.seq.iter() {
            if out.len() == out.capacity() {
                out.reserve_exact(out.capacity());
            }
            out.push(x);
        }
        out
    }

    /// Open a cursor positioned before the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SeqError::IndexUnavailable`] if `index` is greater than the length.
    pub fn list_iter(&self, index: usize) -> Result<Cursor<T>> {
        if index > 0 && self.seq.nth(index - 1).is_none() {
            return Err(SeqError::IndexUnavailable { index });
        }
        Ok(Cursor {
            head: self.seq.clone(),
            current: nthrest(&self.seq, index),
            index,
        })
    }

    pub fn insert(&self, _index: usize, _x: T) -> Result<()> {
        Err(SeqError::UnsupportedMutation { operation: "insert" })
    }

    pub fn push(&self, _x: T) -> Result<()> {
        Err(SeqError::UnsupportedMutation { operation: "push" })
    }

    pub fn remove(&self, _index: usize) -> Result<T> {
        Err(SeqError::UnsupportedMutation { operation: "remove" })
    }

    pub fn set(&self, _index: usize, _x: T) -> Result<T> {
        Err(SeqError::UnsupportedMutation { operation: "set" })
    }

    pub fn retain<P>(&self, _p: P) -> Result<()>
    where
        P: FnMut(&T) -> bool,
    {
        Err(SeqError::UnsupportedMutation { operation: "retain" })
    }

    pub fn sort(&self) -> Result<()> {
        Err(SeqError::UnsupportedMutation { operation: "sort" })
    }

    pub fn clear(&self) -> Result<()> {
        Err(SeqError::UnsupportedMutation { operation: "clear" })
    }
}

impl<T: Element> SeqList<T> {
    /// The elements `[from, to)` as a sequence sharing structure with `self`.
    ///
    /// # Errors
    ///
    /// [`SeqError::IndexUnavailable`] if `from > to` or `to` is greater than the length.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Seq<T>> {
        if from > to {
            return Err(SeqError::IndexUnavailable { index: from });
        }
        if to > 0 && self.seq.nth(to - 1).is_none() {
            return Err(SeqError::IndexUnavailable { index: to });
        }
        Ok(self.seq.drop(from).take(to - from))
    }
}

/// [`Cursor<T>`] moves back and forth between the elements of a sequence.
///
/// Moving forward is constant time; moving backward walks from the start again.
pub struct Cursor<T> {
    head: Seq<T>,
    current: Seq<T>,
    index: usize,
}

impl<T: Clone> Cursor<T> {
    pub fn has_next(&self) -> bool {
        !self.current.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn next_index(&self) -> usize {
        self.index
    }

    /// The index of the element [`previous`](`Cursor::previous`) would return, if there is one.
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Step over the next element and return it.
    pub fn next(&mut self) -> Option<T> {
        let x = self.current.first()?;
        self.current = self.current.rest();
        self.index += 1;
        Some(x)
    }

    /// Step back over the previous element and return it.
    pub fn previous(&mut self) -> Option<T> {
        let index = self.index.checked_sub(1)?;
        self.current = nthrest(&self.head, index);
        self.index = index;
        self.current.first()
    }

    pub fn remove(&mut self) -> Result<()> {
        Err(SeqError::UnsupportedMutation { operation: "remove" })
    }

    pub fn set(&mut self, _x: T) -> Result<()> {
        Err(SeqError::UnsupportedMutation { operation: "set" })
    }

    pub fn add(&mut self, _x: T) -> Result<()> {
        Err(SeqError::UnsupportedMutation { operation: "add" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> SeqList<char> {
        SeqList::new(Seq::from_text("abcab"))
    }

    #[test]
    fn test_get() {
        let list = letters();
        assert_eq!(list.get(0), Ok('a'));
        assert_eq!(list.get(4), Ok('b'));
        assert_eq!(list.get(5), Err(SeqError::IndexUnavailable { index: 5 }));
        assert_eq!(list.get_or(9, '?'), '?');
    }

    #[test]
    fn test_get_on_infinite() {
        let list = SeqList::new(Seq::iterate(0u64, |n| n + 1));
        assert_eq!(list.get(12_345), Ok(12_345));
    }

    #[test]
    fn test_len_and_search() {
        let list = letters();
        assert_eq!(list.len(), 5);
        assert!(!list.is_empty());
        assert!(list.contains(&'c'));
        assert!(!list.contains(&'z'));
        assert_eq!(list.index_of(&'b'), Some(1));
        assert_eq!(list.last_index_of(&'b'), Some(4));
        assert_eq!(list.index_of(&'z'), None);
        assert!(SeqList::new(Seq::<u8>::empty()).is_empty());
    }

    #[test]
    fn test_to_vec_grows() {
        let list = SeqList::from(Seq::from_iterator(0..100));
        let items = list.to_vec();
        assert_eq!(items.len(), 100);
        assert!(items.capacity() >= 100);
        assert_eq!(items[99], 99);
    }

    #[test]
    fn test_sub_list() {
        let list = letters();
        assert_eq!(list.sub_list(1, 3).unwrap().to_vec(), vec!['b', 'c']);
        assert!(list.sub_list(2, 2).unwrap().is_empty());
        assert_eq!(list.sub_list(0, 5).unwrap().count(), 5);
        assert_eq!(list.sub_list(3, 2), Err(SeqError::IndexUnavailable { index: 3 }));
        assert_eq!(list.sub_list(0, 6), Err(SeqError::IndexUnavailable { index: 6 }));
    }

    #[test]
    fn test_cursor() {
        let list = SeqList::new(Seq::from_vec(vec![1, 2, 3]));
        let mut cursor = list.list_iter(0).unwrap();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.previous(), Some(2));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);

        let mut from_end = list.list_iter(3).unwrap();
        assert_eq!(from_end.previous(), Some(3));
        assert!(list.list_iter(4).is_err());
    }

    fn unsupported<T>(operation: &'static str) -> Result<T> {
        Err(SeqError::UnsupportedMutation { operation })
    }

    #[test]
    fn test_mutation_is_rejected() {
        let list = letters();
        assert_eq!(list.insert(0, 'x'), unsupported("insert"));
        assert_eq!(list.push('x'), unsupported("push"));
        assert_eq!(list.remove(0), unsupported("remove"));
        assert_eq!(list.set(0, 'x'), unsupported("set"));
        assert_eq!(list.retain(|_| true), unsupported("retain"));
        assert_eq!(list.sort(), unsupported("sort"));
        assert_eq!(list.clear(), unsupported("clear"));
        assert_eq!(list.get(0), Ok('a'));

        let mut cursor = list.list_iter(0).unwrap();
        assert!(cursor.remove().is_err());
        assert!(cursor.set('x').is_err());
        assert!(cursor.add('x').is_err());
    }
}
