use johnson_apsp::data_structures::MinHeap;
use ordered_float::OrderedFloat;

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

#[test]
fn test_pops_ascend_by_priority() {
    let mut heap: MinHeap<usize, OrderedFloat<f64>> = MinHeap::new();
    heap.push(0, w(3.0));
    heap.push(1, w(1.0));
    heap.push(2, w(2.0));
    heap.push(3, w(0.5));

    assert_eq!(heap.pop(), Some((3, w(0.5))));
    assert_eq!(heap.pop(), Some((1, w(1.0))));
    assert_eq!(heap.pop(), Some((2, w(2.0))));
    assert_eq!(heap.pop(), Some((0, w(3.0))));
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_equal_priorities_pop_in_item_order() {
    let mut heap: MinHeap<usize, OrderedFloat<f64>> = MinHeap::new();
    // Insertion order deliberately scrambled
    heap.push(5, w(1.0));
    heap.push(2, w(1.0));
    heap.push(9, w(1.0));
    heap.push(0, w(1.0));

    let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|(item, _)| item)).collect();
    assert_eq!(order, vec![0, 2, 5, 9]);
}

#[test]
fn test_peek_does_not_remove() {
    let mut heap: MinHeap<usize, OrderedFloat<f64>> = MinHeap::with_capacity(4);
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);

    heap.push(1, w(2.0));
    heap.push(2, w(1.0));

    assert_eq!(heap.peek(), Some((2, w(1.0))));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop(), Some((2, w(1.0))));
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_clear() {
    let mut heap: MinHeap<usize, OrderedFloat<f64>> = MinHeap::new();
    heap.push(1, w(1.0));
    heap.push(2, w(2.0));

    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_duplicate_entries_are_allowed() {
    // The Dijkstra solver relies on stale duplicates being harmless
    let mut heap: MinHeap<usize, OrderedFloat<f64>> = MinHeap::new();
    heap.push(1, w(5.0));
    heap.push(1, w(3.0));

    assert_eq!(heap.pop(), Some((1, w(3.0))));
    assert_eq!(heap.pop(), Some((1, w(5.0))));
}
