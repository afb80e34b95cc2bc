use cyclic::LinkedList;
use proptest::prelude::*;
use std::collections::VecDeque;

#[test]
fn collecting_and_reading_both_ends() {
    let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.len(), 3);
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&3));
    for (i, value) in list.iter().enumerate() {
        assert_eq!(*value, i + 1);
        assert_eq!(list.get(i), Some(&(i + 1)));
    }

    let empty: LinkedList<i32> = Vec::new().into_iter().collect();
    assert!(empty.is_empty());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn remove_all_then_reuse() {
    let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    list.remove_all(false);
    assert!(list.is_empty());
    assert_eq!(list.first(), None);
    list.extend([4, 5]);
    assert!(list.iter().eq(&[4, 5]));
}

#[test]
fn copies_diverge_on_write() {
    let mut a: LinkedList<_> = (0..5).collect();
    let b = a.clone();
    a.remove(2);
    a.insert(0, 10);
    assert!(a.iter().eq(&[10, 0, 1, 3, 4]));
    assert!(b.iter().eq(&[0, 1, 2, 3, 4]));
    assert_ne!(a, b);
}

#[derive(Debug, Clone)]
enum Operation {
    Append(i32),
    Prepend(i32),
    Insert(usize, i32),
    Remove(usize),
    PopFront,
    PopBack,
    Get(usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i32>().prop_map(Operation::Append),
        3 => any::<i32>().prop_map(Operation::Prepend),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Operation::Insert(i, v)),
        2 => any::<usize>().prop_map(Operation::Remove),
        1 => Just(Operation::PopFront),
        1 => Just(Operation::PopBack),
        2 => any::<usize>().prop_map(Operation::Get),
    ]
}

proptest! {
    #[test]
    fn test_linked_list_matches_std_vec_deque(ops in proptest::collection::vec(operation(), 1..150)) {
        let mut model = VecDeque::new();
        let mut list = LinkedList::new();

        for op in ops {
            match op {
                Operation::Append(v) => {
                    model.push_back(v);
                    list.append(v);
                }
                Operation::Prepend(v) => {
                    model.push_front(v);
                    list.prepend(v);
                }
                Operation::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    model.insert(i, v);
                    list.insert(i, v);
                }
                Operation::Remove(i) => {
                    if !model.is_empty() {
                        let i = i % model.len();
                        prop_assert_eq!(Some(list.remove(i)), model.remove(i));
                    }
                }
                Operation::PopFront => {
                    prop_assert_eq!(list.pop_front(), model.pop_front());
                }
                Operation::PopBack => {
                    prop_assert_eq!(list.pop_back(), model.pop_back());
                }
                Operation::Get(i) => {
                    let i = i % (model.len() + 1);
                    prop_assert_eq!(list.get(i), model.get(i));
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.first(), model.front());
            prop_assert_eq!(list.last(), model.back());
        }

        prop_assert!(list.iter().eq(model.iter()));
        prop_assert!(list.iter().rev().eq(model.iter().rev()));
    }
}
