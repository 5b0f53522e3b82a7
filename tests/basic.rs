use lazyseq::sequences::print;
use lazyseq::{seq, Seq, SeqError, SeqList, Sequence};

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_basic() {
    let generated = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&generated);

    // the odd squares below 100, from an infinite source which is only forced as far as needed
    let naturals = Seq::iterate(0u64, move |n| {
        counter.fetch_add(1, Ordering::SeqCst);
        n + 1
    });
    let odd_squares = naturals
        .map(|n| n * n)
        .filter(|n| n % 2 == 1)
        .take_while(|n| *n < 100);

    assert_eq!(odd_squares.to_vec(), vec![1, 9, 25, 49, 81]);
    assert_eq!(generated.load(Ordering::SeqCst), 11);

    // realized values are memoized
    assert_eq!(odd_squares.count(), 5);
    assert_eq!(generated.load(Ordering::SeqCst), 11);

    let rest = print(&odd_squares, 3);
    assert_eq!(rest.first(), Some(49));
}

#[test]
fn test_persistence() {
    let base = Seq::from_vec(vec![2, 3]);
    let one = Seq::cons(1, base.clone());
    let zero = Seq::cons(0, base.clone());

    assert_eq!(one.to_vec(), vec![1, 2, 3]);
    assert_eq!(zero.to_vec(), vec![0, 2, 3]);
    assert_eq!(base.to_vec(), vec![2, 3]);
}

#[test]
fn test_equality_across_sources() {
    let expected = vec!['a', 'b', 'c'];

    let sources: Vec<Seq<char>> = vec![
        seq(expected.clone()),
        seq("abc"),
        Seq::from_iterator(expected.clone().into_iter()),
        Seq::from_iterator_chunked(expected.clone().into_iter(), 2),
        Seq::cons('a', Seq::cons('b', Seq::cons('c', Seq::empty()))),
        Seq::lazy(|| seq("abc")),
        seq("xabc").drop(1),
        seq("abcd").take(3),
    ];

    for s in &sources {
        assert_eq!(s.to_vec(), expected);
        assert_eq!(s, &sources[0]);
    }

    let distinct: HashSet<Seq<char>> = sources.into_iter().collect();
    assert_eq!(distinct.len(), 1);
}

#[test]
fn test_take_drop_reassemble() {
    let s = Seq::range(0, 25);
    for n in [0, 1, 7, 24, 25, 30] {
        let reassembled = s.take(n).concat(&s.drop(n));
        assert_eq!(reassembled, s);
    }
}

#[test]
fn test_chunked_source_pulls_exactly_once() {
    let pulled = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&pulled);
    let s = Seq::from_iterator((0..5000).inspect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    assert_eq!(s.first(), Some(0));
    assert_eq!(pulled.load(Ordering::SeqCst), lazyseq::CHUNK_SIZE);

    assert_eq!(s.count(), 5000);
    assert_eq!(s.nth(4999), Some(4999));
    assert_eq!(pulled.load(Ordering::SeqCst), 5000);
}

#[test]
fn test_partitions() {
    let s = Seq::range(0, 10);
    let groups: Vec<Vec<i64>> = s.partition(4, 3).map(|g| g.to_vec()).to_vec();
    assert_eq!(groups, vec![vec![0, 1, 2, 3], vec![3, 4, 5, 6], vec![6, 7, 8, 9]]);

    let all: Vec<Vec<i64>> = s.partition_all(4, 4).map(|g| g.to_vec()).to_vec();
    assert_eq!(all, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]]);
}

#[test]
fn test_maps() {
    let words = seq(vec!["apple", "avocado", "banana"]);

    let by_initial = words.to_map_merge(
        |w| w.chars().next(),
        |w| vec![*w],
        |mut existing, incoming| {
            existing.extend(incoming);
            existing
        },
    );
    assert_eq!(by_initial[&Some('a')], vec!["apple", "avocado"]);
    assert_eq!(by_initial[&Some('b')], vec!["banana"]);

    assert_eq!(
        words.to_map(|w| w.starts_with('a'), |w| *w),
        Err(SeqError::KeyCollision {
            key: "true".to_string()
        })
    );

    let source: HashMap<&str, u8> = [("x", 1), ("y", 2)].into_iter().collect();
    let pairs = seq(source.clone());
    assert_eq!(pairs.count(), 2);
    assert_eq!(pairs.to_map_pairs(), Ok(source));
}

#[test]
fn test_list_view() {
    let list = SeqList::new(seq("hello"));
    assert_eq!(list.len(), 5);
    assert_eq!(list.get(1), Ok('e'));
    assert_eq!(list.index_of(&'l'), Some(2));
    assert_eq!(list.last_index_of(&'l'), Some(3));
    assert_eq!(list.sub_list(1, 4).map(|s| s.join("")), Ok("ell".to_string()));
    assert_eq!(
        list.clear(),
        Err(SeqError::UnsupportedMutation { operation: "clear" })
    );
}
