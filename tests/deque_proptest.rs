use cyclic::Deque;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    Append(i32),
    Prepend(i32),
    RemoveFirst,
    RemoveLast,
    RemoveFirstN(usize),
    RemoveLastN(usize),
    Reserve(usize),
    Set(usize, i32),
    Swap(usize, usize),
    MakeContiguous,
    Fork,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<i32>().prop_map(Operation::Append),
        4 => any::<i32>().prop_map(Operation::Prepend),
        2 => Just(Operation::RemoveFirst),
        2 => Just(Operation::RemoveLast),
        1 => (0usize..6).prop_map(Operation::RemoveFirstN),
        1 => (0usize..6).prop_map(Operation::RemoveLastN),
        1 => (0usize..40).prop_map(Operation::Reserve),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Operation::Set(i, v)),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Operation::Swap(a, b)),
        1 => Just(Operation::MakeContiguous),
        1 => Just(Operation::Fork),
    ]
}

proptest! {
    #[test]
    fn test_deque_matches_std_vec_deque(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut model = VecDeque::new();
        let mut deque = Deque::new();
        // Snapshots taken by `Fork`, with the contents they must keep.
        let mut snapshots: Vec<(Deque<i32>, Vec<i32>, usize)> = Vec::new();

        for op in ops {
            match op {
                Operation::Append(v) => {
                    model.push_back(v);
                    deque.append(v);
                }
                Operation::Prepend(v) => {
                    model.push_front(v);
                    deque.prepend(v);
                }
                Operation::RemoveFirst => {
                    prop_assert_eq!(deque.pop_front(), model.pop_front());
                }
                Operation::RemoveLast => {
                    prop_assert_eq!(deque.pop_back(), model.pop_back());
                }
                Operation::RemoveFirstN(n) => {
                    let n = n.min(model.len());
                    model.drain(..n);
                    deque.remove_first_n(n);
                }
                Operation::RemoveLastN(n) => {
                    let n = n.min(model.len());
                    model.truncate(model.len() - n);
                    deque.remove_last_n(n);
                }
                Operation::Reserve(minimum) => {
                    deque.reserve_capacity(minimum);
                    prop_assert!(deque.capacity() >= minimum);
                }
                Operation::Set(i, v) => {
                    if !model.is_empty() {
                        let i = i % model.len();
                        model[i] = v;
                        deque[i] = v;
                    }
                }
                Operation::Swap(a, b) => {
                    if !model.is_empty() {
                        let (a, b) = (a % model.len(), b % model.len());
                        model.swap(a, b);
                        deque.swap(a, b);
                    }
                }
                Operation::MakeContiguous => {
                    prop_assert_eq!(deque.make_contiguous(), model.make_contiguous());
                }
                Operation::Fork => {
                    let expected: Vec<i32> = model.iter().copied().collect();
                    snapshots.push((deque.clone(), expected, deque.capacity()));
                }
            }

            let capacity = deque.capacity();
            prop_assert!(capacity == 0 || capacity.is_power_of_two());
            prop_assert!(capacity == 0 || capacity > deque.len());
            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.first(), model.front());
            prop_assert_eq!(deque.last(), model.back());
        }

        prop_assert!(deque.iter().eq(model.iter()));
        prop_assert!(deque.iter().rev().eq(model.iter().rev()));

        for (snapshot, expected, capacity) in &snapshots {
            prop_assert!(snapshot.iter().eq(expected.iter()));
            prop_assert_eq!(snapshot.capacity(), *capacity);
        }
    }
}
