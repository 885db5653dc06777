//! Container integration tests
//!
//! Push/get/remove scenarios plus property tests for the growth, ordering
//! and compaction invariants.

use proptest::prelude::*;
use skirmish::container::Container;
use skirmish::core::error::SkirmishError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record {
    id: u32,
    tag: u32,
}

fn contents<T: Clone>(container: &Container<T>) -> Vec<T> {
    container.iter().cloned().collect()
}

#[test]
fn test_push_get_round_trip() {
    let mut container = Container::<u32>::create(2).unwrap();
    assert_eq!(container.element_size(), 4);
    container.push_back(0x0000_0001).unwrap();
    container.push_back(0x0000_0002).unwrap();
    container.push_back(0x0000_0003).unwrap();

    assert_eq!(container.len(), 3);
    assert_eq!(container.capacity(), 4);
    assert_eq!(container.get(0).unwrap(), 1);
    assert_eq!(container.get(1).unwrap(), 2);
    assert_eq!(container.get(2).unwrap(), 3);

    // Removal by index compacts the tail
    assert_eq!(container.remove_by_index(1).unwrap(), 2);
    assert_eq!(container.len(), 2);
    assert_eq!(container.get(0).unwrap(), 1);
    assert_eq!(container.get(1).unwrap(), 3);
}

#[test]
fn test_remove_by_value_removes_first_equal_record() {
    let mut container = Container::create(4).unwrap();
    container.push_back(Record { id: 1, tag: 9 }).unwrap();
    container.push_back(Record { id: 2, tag: 9 }).unwrap();
    container.push_back(Record { id: 1, tag: 9 }).unwrap();

    assert!(container.remove_by_value(&Record { id: 1, tag: 9 }));
    assert_eq!(
        contents(&container),
        vec![Record { id: 2, tag: 9 }, Record { id: 1, tag: 9 }]
    );
}

#[test]
fn test_invalid_arguments_leave_container_unchanged() {
    let mut container = Container::<u32>::create(2).unwrap();
    container.push_back(7).unwrap();

    assert!(matches!(
        container.get(5),
        Err(SkirmishError::IndexOutOfBounds { index: 5, len: 1 })
    ));
    assert!(container.remove_by_index(1).is_err());
    assert!(container.replace(1, 0).is_err());
    assert_eq!(contents(&container), vec![7]);
    assert_eq!(container.capacity(), 2);
}

#[test]
fn test_growth_from_one_slot() {
    let mut container = Container::<u16>::create(1).unwrap();
    let mut seen = Vec::new();
    for value in 0..9u16 {
        container.push_back(value).unwrap();
        seen.push(container.capacity());
    }
    assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    RemoveIndex(usize),
    RemoveValue(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::Push),
        1 => (0usize..16).prop_map(Op::RemoveIndex),
        1 => any::<u8>().prop_map(Op::RemoveValue),
    ]
}

proptest! {
    /// The container tracks a plain Vec model through any operation sequence
    #[test]
    fn prop_matches_vec_model(initial in 1usize..8, ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut container = Container::<u8>::create(initial).unwrap();
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    let before = container.capacity();
                    let len = container.len();
                    container.push_back(value).unwrap();
                    model.push(value);

                    prop_assert_eq!(container.get(len).unwrap(), value);
                    if len == before {
                        prop_assert_eq!(container.capacity(), (2 * before).max(1));
                    } else {
                        prop_assert_eq!(container.capacity(), before);
                    }
                }
                Op::RemoveIndex(index) => {
                    let result = container.remove_by_index(index);
                    if index < model.len() {
                        prop_assert_eq!(result.unwrap(), model.remove(index));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::RemoveValue(value) => {
                    let removed = container.remove_by_value(&value);
                    match model.iter().position(|v| *v == value) {
                        Some(index) => {
                            prop_assert!(removed);
                            model.remove(index);
                        }
                        None => {
                            prop_assert!(!removed);
                        }
                    }
                }
            }

            prop_assert!(container.len() <= container.capacity());
            prop_assert_eq!(contents(&container), model.clone());
        }
    }

    /// Search returns the leftmost match and never mutates
    #[test]
    fn prop_search_leftmost(values in prop::collection::vec(0u8..8, 0..32), key in 0u8..8) {
        let mut container = Container::<u8>::create(1).unwrap();
        for value in &values {
            container.push_back(*value).unwrap();
        }
        let before = contents(&container);

        let found = container.search(&key, |slot, key| slot == key);
        let position = container.position(&key, |slot, key| slot == key);
        prop_assert_eq!(position, values.iter().position(|v| *v == key));
        prop_assert_eq!(found, position.map(|i| values[i]));
        prop_assert_eq!(contents(&container), before);
    }

    /// Removal by index keeps the prefix and shifts the suffix left
    #[test]
    fn prop_remove_by_index_shifts(values in prop::collection::vec(any::<u32>(), 1..32), pick in any::<prop::sample::Index>()) {
        let mut container = Container::<u32>::create(4).unwrap();
        for value in &values {
            container.push_back(*value).unwrap();
        }
        let index = pick.index(values.len());

        prop_assert_eq!(container.remove_by_index(index).unwrap(), values[index]);
        for j in 0..index {
            prop_assert_eq!(container.get(j).unwrap(), values[j]);
        }
        for j in index..container.len() {
            prop_assert_eq!(container.get(j).unwrap(), values[j + 1]);
        }
    }
}
