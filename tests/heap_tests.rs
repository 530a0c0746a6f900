use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use transit_sssp::data_structures::{FibonacciHeap, IndexedBinaryHeap, PriorityQueue};
use transit_sssp::Error;

#[test]
fn test_binary_heap_extract_from_empty() {
    let mut heap: IndexedBinaryHeap<&str, i64> = IndexedBinaryHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_binary_heap_decrease_key_semantics() {
    let mut heap = IndexedBinaryHeap::new();
    heap.insert(10, "a");
    heap.insert(20, "b");

    // Absent vertex: inserted
    assert_eq!(heap.decrease_key(&"c", 15), &(15, "c"));
    assert_eq!(heap.len(), 3);

    // Higher priority: ignored
    assert_eq!(heap.decrease_key(&"a", 50), &(10, "a"));
    assert_eq!(heap.priority_of(&"a"), Some(10));

    // Lower priority: applied and bubbled to the root
    heap.decrease_key(&"b", 1);
    assert_eq!(heap.extract_min(), Some((1, "b")));
    assert_eq!(heap.extract_min(), Some((10, "a")));

    // Extracted vertices count as absent
    assert!(!heap.contains(&"a"));
    heap.decrease_key(&"a", 12);
    assert_eq!(heap.extract_min(), Some((12, "a")));
    assert_eq!(heap.extract_min(), Some((15, "c")));
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_binary_heap_insert_never_duplicates() {
    let mut heap = IndexedBinaryHeap::new();
    heap.insert(5, 1u32);
    heap.insert(3, 1u32);
    heap.insert(9, 1u32);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.extract_min(), Some((3, 1)));
    assert!(heap.is_empty());
}

#[test]
fn test_binary_heap_min_monotonic_and_lossless() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut heap: IndexedBinaryHeap<u32, i64> = IndexedBinaryHeap::new();
    let mut expected: HashMap<u32, i64> = HashMap::new();

    for vertex in 0..500u32 {
        let priority = rng.gen_range(100..10_000);
        heap.insert(priority, vertex);
        expected.insert(vertex, priority);
    }

    let mut last = i64::MIN;
    while !heap.is_empty() {
        // Interleave decreases that stay above the last extracted priority
        for _ in 0..3 {
            let vertex = rng.gen_range(0..500u32);
            if let Some(&current) = expected.get(&vertex) {
                let lowered = (current - rng.gen_range(0..200)).max(last);
                heap.decrease_key(&vertex, lowered);
                expected.insert(vertex, current.min(lowered));
            }
        }

        let (priority, vertex) = heap.extract_min().unwrap();
        assert!(priority >= last, "extracted {} after {}", priority, last);
        let true_min = *expected.values().min().unwrap();
        assert_eq!(priority, true_min);
        assert_eq!(expected.remove(&vertex), Some(priority));
        last = priority;
    }
    assert!(expected.is_empty(), "entries lost: {:?}", expected);
}

#[test]
fn test_fibonacci_heap_extract_from_empty() {
    let mut heap: FibonacciHeap<i64, &str> = FibonacciHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), None);
    assert_eq!(heap.peek_min(), None);
}

#[test]
fn test_fibonacci_heap_min_regardless_of_insertion_order() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in [1usize, 2, 3, 10, 64, 257] {
        let mut keys: Vec<i64> = (0..n as i64).map(|k| k * 3 - 40).collect();
        keys.shuffle(&mut rng);

        let mut heap = FibonacciHeap::new();
        for (item, &key) in keys.iter().enumerate() {
            heap.insert(key, item);
        }
        let (key, _) = heap.extract_min().unwrap();
        assert_eq!(key, -40, "wrong minimum for n = {}", n);
        assert_eq!(heap.len(), n - 1);
    }
}

#[test]
fn test_fibonacci_heap_sorts() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut keys: Vec<i64> = (0..1_000).map(|_| rng.gen_range(-5_000..5_000)).collect();

    let mut heap = FibonacciHeap::new();
    for (item, &key) in keys.iter().enumerate() {
        heap.insert(key, item);
    }

    let mut extracted = Vec::new();
    while let Some((key, _)) = heap.extract_min() {
        extracted.push(key);
    }
    keys.sort();
    assert_eq!(extracted, keys);
}

#[test]
fn test_fibonacci_heap_decrease_key() {
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..20).map(|i| heap.insert(100 + i, i)).collect();

    // Build trees so that later decreases hit non-root nodes
    assert_eq!(heap.extract_min(), Some((100, 0)));

    heap.decrease_key(handles[19], 50).unwrap();
    heap.decrease_key(handles[7], 51).unwrap();
    heap.decrease_key(handles[12], 12).unwrap();
    // Equal key is accepted and changes nothing
    heap.decrease_key(handles[12], 12).unwrap();

    assert_eq!(heap.extract_min(), Some((12, 12)));
    assert_eq!(heap.extract_min(), Some((50, 19)));
    assert_eq!(heap.extract_min(), Some((51, 7)));
    assert_eq!(heap.extract_min(), Some((101, 1)));
}

#[test]
fn test_fibonacci_heap_rejects_key_increase() {
    let mut heap = FibonacciHeap::new();
    let handle = heap.insert(10, "a");
    assert!(matches!(heap.decrease_key(handle, 11), Err(Error::InvalidOperation(_))));
    assert_eq!(heap.key_of(handle), Some(10));
}

#[test]
fn test_fibonacci_heap_handle_lookup() {
    let mut heap = FibonacciHeap::new();
    let handle = heap.insert(4, "stop");
    assert_eq!(heap.handle_of(&"stop"), Some(handle));

    heap.extract_min();
    assert_eq!(heap.handle_of(&"stop"), None);
    assert!(matches!(heap.decrease_key(handle, 1), Err(Error::InvalidHandle(_))));
}

fn drain<Q: PriorityQueue<&'static str, i64>>(mut queue: Q) -> Vec<(i64, &'static str)> {
    queue.push(30, "a");
    queue.push(20, "b");
    queue.push_or_decrease("a", 5).unwrap();
    queue.push_or_decrease("c", 25).unwrap();
    assert!(queue.contains(&"c"));
    assert_eq!(queue.len(), 3);

    let mut out = Vec::new();
    while let Some(entry) = queue.pop_min() {
        out.push(entry);
    }
    out
}

#[test]
fn test_both_backends_behave_alike() {
    let expected = vec![(5, "a"), (20, "b"), (25, "c")];
    assert_eq!(drain(IndexedBinaryHeap::new()), expected);
    assert_eq!(drain(FibonacciHeap::new()), expected);
}

#[test]
fn test_fibonacci_queue_decrease_without_live_node_fails() {
    let mut queue: FibonacciHeap<i64, &str> = FibonacciHeap::new();
    assert!(matches!(
        PriorityQueue::decrease_priority(&mut queue, &"ghost", 1),
        Err(Error::InvalidOperation(_))
    ));
}
