use cyclic::heap::{self, Ascending, Descending};
use cyclic::PriorityQueue;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Enqueue(i16),
    Dequeue,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i16>().prop_map(Operation::Enqueue),
        2 => Just(Operation::Dequeue),
    ]
}

proptest! {
    #[test]
    fn test_priority_queue_matches_sorted_vec(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut model: Vec<i16> = Vec::new();
        let mut queue = PriorityQueue::new();

        for op in ops {
            match op {
                Operation::Enqueue(v) => {
                    model.push(v);
                    model.sort_unstable();
                    queue.enqueue(v);
                }
                Operation::Dequeue => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(queue.try_dequeue(), expected);
                }
            }
            prop_assert!(queue.is_valid_heap());
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.front(), model.first());
        }

        prop_assert_eq!(queue.into_sorted_vec(), model);
    }

    #[test]
    fn test_bulk_load_drains_in_order(values in proptest::collection::vec(any::<i32>(), 0..300)) {
        let queue = PriorityQueue::from_iter_with_order(values.clone(), Descending);
        prop_assert!(queue.is_valid_heap());

        let mut expected = values;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(queue.into_sorted_vec(), expected);
    }

    #[test]
    fn test_heapify_yields_a_heap(mut values in proptest::collection::vec(any::<u8>(), 0..100)) {
        let mut sorted = values.clone();
        sorted.sort_unstable();

        heap::heapify(&mut values, &Ascending);
        prop_assert!(heap::is_heap(&values, &Ascending));

        let mut permutation = values.clone();
        permutation.sort_unstable();
        prop_assert_eq!(permutation, sorted);
    }
}
