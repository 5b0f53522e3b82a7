//! This module provides chunks, the transfer unit of bulk pulls from general sources, and the sequence representation pairing a chunk with the rest of a sequence.
//!
//! Pulling elements a chunk at a time preserves laziness and memoization at chunk granularity instead of element granularity, which saves one lazy node (with its own memo slot and lock) per element.

use super::Sequence;
use crate::Seq;

use std::sync::Arc;

/// The number of elements pulled from a general source per fetch.
pub const CHUNK_SIZE: usize = 1000;

/// [`Chunk<T>`] is an immutable view `[offset, end)` on a shared array of elements.
pub struct Chunk<T> {
    items: Arc<[T]>,
    offset: usize,
    end: usize,
}

impl<T> Clone for Chunk<T> {
    fn clone(&self) -> Self {
        Chunk {
            items: Arc::clone(&self.items),
            offset: self.offset,
            end: self.end,
        }
    }
}

impl<T> Chunk<T> {
    pub fn new(items: Vec<T>) -> Self {
        let end = items.len();
        Chunk {
            items: items.into(),
            offset: 0,
            end,
        }
    }

    /// Get the `i`-th element of the view in constant time.
    pub fn nth(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Create the view without its first element; nothing is copied.
    pub fn drop_first(&self) -> Self {
        Chunk {
            items: Arc::clone(&self.items),
            offset: (self.offset + 1).min(self.end),
            end: self.end,
        }
    }

    pub fn count(&self) -> usize {
        self.end - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == self.end
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[self.offset..self.end]
    }
}

/// [`ChunkedCons<T>`] is a non-empty chunk followed by the rest of a sequence.
pub struct ChunkedCons<T> {
    chunk: Chunk<T>,
    more: Arc<Seq<T>>,
}

impl<T> Clone for ChunkedCons<T> {
    fn clone(&self) -> Self {
        ChunkedCons {
            chunk: self.chunk.clone(),
            more: Arc::clone(&self.more),
        }
    }
}

impl<T> ChunkedCons<T> {
    /// Pair `chunk` with `more`, falling back to `more` itself if the chunk is empty.
    pub fn seq(chunk: Chunk<T>, more: Seq<T>) -> Seq<T> {
        if chunk.is_empty() {
            more
        } else {
            Seq::Chunked(ChunkedCons {
                chunk,
                more: Arc::new(more),
            })
        }
    }

    pub fn chunk(&self) -> &Chunk<T> {
        &self.chunk
    }

    /// Borrow the sequence following the chunk.
    pub fn more(&self) -> &Seq<T> {
        &self.more
    }

    /// Skip `n` elements of the chunk, which must have more than `n` of them.
    pub(crate) fn skip(&self, n: usize) -> Seq<T> {
        Seq::Chunked(ChunkedCons {
            chunk: Chunk {
                items: Arc::clone(&self.chunk.items),
                offset: (self.chunk.offset + n).min(self.chunk.end),
                end: self.chunk.end,
            },
            more: Arc::clone(&self.more),
        })
    }

    pub(crate) fn into_more(self) -> Option<Seq<T>> {
        Arc::into_inner(self.more)
    }
}

impl<T: Clone> Sequence<T> for ChunkedCons<T> {
    fn first(&self) -> Option<T> {
        self.chunk.nth(0).cloned()
    }

    fn rest(&self) -> Seq<T> {
        if self.chunk.count() > 1 {
            Seq::Chunked(ChunkedCons {
                chunk: self.chunk.drop_first(),
                more: Arc::clone(&self.more),
            })
        } else {
            (*self.more).clone()
        }
    }

    fn is_empty(&self) -> bool {
        false
    }
}
