//! This module provides sequences as zero-copy windows on random-access buffers.
//! Text is viewed through a shared array of its characters, so a window on text is indexed like one on any other array.

use super::Sequence;
use crate::Seq;

use std::sync::Arc;

/// A characterization of random-access buffers of some type `T` addressed by index.
pub trait Buffer<T>: Send + Sync {
    /// The number of elements.
    fn len(&self) -> usize;
    /// Copy the element at `index`.
    fn get(&self, index: usize) -> T;
}

impl<T: Clone + Send + Sync> Buffer<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone + Send + Sync> Buffer<T> for Arc<[T]> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }
}

/// [`Window<T>`] is a non-empty view `[index, end)` on a shared buffer.
///
/// Indexing, counting, taking and dropping only move the bounds, so all of them are constant time.
pub struct Window<T> {
    buffer: Arc<dyn Buffer<T>>,
    index: usize,
    end: usize,
}

impl<T> Clone for Window<T> {
    fn clone(&self) -> Self {
        Window {
            buffer: Arc::clone(&self.buffer),
            index: self.index,
            end: self.end,
        }
    }
}

impl<T> Window<T> {
    /// View `[index, end)` of `buffer`, or the empty sequence if that range is empty.
    pub fn seq(buffer: Arc<dyn Buffer<T>>, index: usize, end: usize) -> Seq<T> {
        let end = end.min(buffer.len());
        if index >= end {
            Seq::Empty
        } else {
            Seq::Window(Window { buffer, index, end })
        }
    }

    /// View the whole of `buffer`.
    pub fn whole(buffer: Arc<dyn Buffer<T>>) -> Seq<T> {
        let end = buffer.len();
        Window::seq(buffer, 0, end)
    }

    pub fn nth(&self, n: usize) -> Option<T> {
        self.index
            .checked_add(n)
            .filter(|i| *i < self.end)
            .map(|i| self.buffer.get(i))
    }

    pub fn count(&self) -> usize {
        self.end - self.index
    }

    /// The window on the first `n` elements.
    pub fn take(&self, n: usize) -> Seq<T> {
        let end = self.index.saturating_add(n).min(self.end);
        Window::seq(Arc::clone(&self.buffer), self.index, end)
    }

    /// The window without the first `n` elements.
    pub fn drop(&self, n: usize) -> Seq<T> {
        let index = self.index.saturating_add(n);
        Window::seq(Arc::clone(&self.buffer), index, self.end)
    }
}

impl<T> Sequence<T> for Window<T> {
    fn first(&self) -> Option<T> {
        Some(self.buffer.get(self.index))
    }

    fn rest(&self) -> Seq<T> {
        Window::seq(Arc::clone(&self.buffer), self.index + 1, self.end)
    }

    fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::assert_head_eq;
    use crate::assert_tail_starts_with;

    fn array(items: Vec<i32>) -> Arc<dyn Buffer<i32>> {
        Arc::new(items)
    }

    fn text(s: &str) -> Arc<dyn Buffer<char>> {
        let chars: Arc<[char]> = s.chars().collect();
        Arc::new(chars)
    }

    #[test]
    fn test_array_window() {
        let seq = Window::whole(array(vec![1, 2, 3]));
        assert_head_eq!(seq, 1);
        assert_tail_starts_with!(seq, [2, 3]);
        assert!(seq.rest().rest().rest().is_empty());
    }

    #[test]
    fn test_empty_window() {
        assert!(matches!(Window::whole(array(Vec::new())), Seq::Empty));
        assert!(matches!(Window::seq(array(vec![1, 2]), 2, 2), Seq::Empty));
    }

    #[test]
    fn test_bounded_window() {
        let seq = Window::seq(array(vec![1, 2, 3, 4]), 1, 3);
        assert_eq!(seq.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_take_drop_nth() {
        let Seq::Window(window) = Window::whole(array(vec![10, 20, 30, 40])) else {
            panic!("expected a window");
        };
        assert_eq!(window.nth(2), Some(30));
        assert_eq!(window.nth(4), None);
        assert_eq!(window.count(), 4);
        assert_eq!(window.take(2).to_vec(), vec![10, 20]);
        assert_eq!(window.take(10).to_vec(), vec![10, 20, 30, 40]);
        assert_eq!(window.drop(3).to_vec(), vec![40]);
        assert!(window.drop(4).is_empty());
    }

    #[test]
    fn test_text_window() {
        let seq = Window::whole(text("añb"));
        assert_head_eq!(seq, 'a');
        assert_tail_starts_with!(seq, ['ñ', 'b']);

        let Seq::Window(window) = seq else {
            panic!("expected a window");
        };
        assert_eq!(window.count(), 3);
        assert_eq!(window.nth(2), Some('b'));
        assert_eq!(window.drop(1).to_vec(), vec!['ñ', 'b']);
        assert_eq!(window.take(2).to_vec(), vec!['a', 'ñ']);
    }

    #[test]
    fn test_text_window_bounds_move_by_characters() {
        let Seq::Window(window) = Window::whole(text("ñññx")) else {
            panic!("expected a window");
        };
        let Seq::Window(last) = window.drop(3) else {
            panic!("expected a window");
        };
        assert_eq!(last.index, 3);
        assert_eq!(last.count(), 1);
        assert_eq!(window.nth(3), Some('x'));
        assert!(window.drop(usize::MAX).is_empty());
        assert_eq!(window.take(usize::MAX).count(), 4);
    }
}
