use lazyseq::{Seq, Sequence};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const THREADS: usize = 8;

#[test]
fn test_generator_runs_once_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let shared = Seq::lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        Seq::from_vec(vec![1, 2, 3])
    });

    let observed: Vec<Vec<i32>> = crossbeam::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|_| shared.to_vec()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(observed.iter().all(|v| *v == vec![1, 2, 3]));
}

#[test]
fn test_chunks_pulled_once_across_threads() {
    let pulled = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&pulled);
    let shared = Seq::from_iterator((0..10_000u64).inspect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let sums: Vec<u64> = crossbeam::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|_| shared.fold(0, |acc, n| acc + n)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
    .unwrap();

    assert_eq!(pulled.load(Ordering::SeqCst), 10_000);
    assert!(sums.iter().all(|s| *s == 49_995_000));
}

#[test]
fn test_shared_infinite_pipeline() {
    let squares = Seq::iterate(1u64, |n| n + 1).map(|n| n * n);

    crossbeam::scope(|scope| {
        for i in 0..THREADS {
            let squares = squares.clone();
            scope.spawn(move |_| {
                let offset = i * 100;
                let expected = ((offset + 1) as u64).pow(2);
                assert_eq!(squares.drop(offset).first(), Some(expected));
            });
        }
    })
    .unwrap();

    assert!(squares.is_realized());
    assert_eq!(squares.nth(99), Some(10_000));
}

#[test]
fn test_sequences_cross_thread_boundaries() {
    let words = Seq::from_text("persistent");
    let handle = thread::spawn(move || words.distinct().join(""));
    assert_eq!(handle.join().unwrap(), "persitn");
}
