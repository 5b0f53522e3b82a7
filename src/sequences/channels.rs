//! This module provides sequences of the messages received over a channel.
//! Messages have no efficient bulk-pull shape, so every message gets its own lazy node, and receiving happens no earlier than the node is observed.

use crate::{Element, Seq};

use crossbeam::channel::{self, Receiver, Sender};

use tracing::debug;

impl<T: Element> Seq<T> {
    /// Create the sequence of messages received by `receiver`.
    /// The sequence ends when all senders are disconnected.
    ///
    /// Note that observing an unrealized node blocks the current thread until a message arrives.
    pub fn from_channel(receiver: Receiver<T>) -> Self {
        Seq::lazy(move || match receiver.recv() {
            Ok(message) => Seq::cons(message, Seq::from_channel(receiver.clone())),
            Err(_) => {
                debug!("channel disconnected, ending sequence");
                Seq::Empty
            }
        })
    }
}

/// Create a channel of capacity `capacity` whose receiving end is a sequence.
///
/// # Examples
///
/// ```
/// use lazyseq::sequences::channels::bounded;
///
/// let (tx, seq) = bounded(2);
/// tx.send(1).unwrap();
/// tx.send(2).unwrap();
/// drop(tx);
///
/// assert_eq!(seq.to_vec(), vec![1, 2]);
/// ```
pub fn bounded<T: Element>(capacity: usize) -> (Sender<T>, Seq<T>) {
    let (tx, rx) = channel::bounded(capacity);
    (tx, Seq::from_channel(rx))
}

/// Create a channel without capacity bound whose receiving end is a sequence.
pub fn unbounded<T: Element>() -> (Sender<T>, Seq<T>) {
    let (tx, rx) = channel::unbounded();
    (tx, Seq::from_channel(rx))
}

/// Send each of the given messages over a sender, panicking if the channel is disconnected.
#[macro_export]
macro_rules! enqueue {
    ($tx:expr, [$($x:expr),* $(,)?]) => {
        $( $tx.send($x).unwrap(); )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequences::Sequence;

    use crate::assert_head_eq;
    use crate::assert_tail_starts_with;
    use crate::enqueue;

    #[test]
    fn test_from_channel() {
        let (tx, seq) = unbounded();
        enqueue!(tx, [true, false]);

        assert!(!seq.is_realized());
        assert_head_eq!(seq, true);
        assert_tail_starts_with!(seq, [false]);
    }

    #[test]
    fn test_disconnect_ends_sequence() {
        let (tx, seq) = unbounded();
        enqueue!(tx, [1, 2, 3]);
        drop(tx);

        assert_eq!(seq.count(), 3);
    }

    #[test]
    fn test_received_once() {
        let (tx, seq) = unbounded();
        enqueue!(tx, [1, 2]);

        assert_eq!(seq.first(), Some(1));
        assert_eq!(seq.first(), Some(1));
        assert_eq!(seq.rest().first(), Some(2));
    }
}
