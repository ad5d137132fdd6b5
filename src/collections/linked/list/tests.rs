#![cfg(test)]

use std::collections::VecDeque;
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::error::{ConcurrentModification, CursorError, IllegalState};
use crate::collections::traits::{Deque, ListCursor, Queue};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_deque_ends() {
    let mut list = LinkedList::new();
    list.add_first(2);
    list.add_first(1);
    list.add_last(3);
    list.verify_double_links();

    assert!(list.iter().copied().eq([1, 2, 3]));
    assert_eq!(list.remove_last(), Ok(3));
    assert_eq!(list.remove_first(), Ok(1));
    assert_eq!(list.get_first(), Ok(&2));
    assert_eq!(list.get_last(), Ok(&2), "A single element should be both first and last.");
    list.verify_double_links();

    assert_eq!(list.poll_first(), Some(2));
    assert!(list.is_empty());
    assert_eq!(list.poll_first(), None);
    assert_eq!(list.poll_last(), None);
    assert_eq!(list.remove_first(), Err(NoSuchElement));
    assert_eq!(list.remove_last(), Err(NoSuchElement));
    assert_eq!(list.get_first(), Err(NoSuchElement));
    assert_eq!(list.peek_last(), None);

    assert_eq!(list.offer_first(5), Ok(()));
    assert_eq!(list.offer_last(6), Ok(()));
    assert_eq!(list, LinkedList::from([5, 6]));
}

#[test]
fn test_both_ends_from_front() {
    let mut list = LinkedList::new();
    list.add_first(1);
    list.add_first(2);
    list.add_first(3);

    assert_eq!(list.poll_last(), Some(1), "The first element added should end up last.");
    assert_eq!(list.poll_first(), Some(3));
    assert_eq!(list, LinkedList::from([2]));
    list.verify_double_links();
}

#[test]
fn test_queue_and_stack_views() {
    let mut queue = LinkedList::new();
    Queue::add(&mut queue, 'a');
    assert_eq!(queue.offer('b'), Ok(()));

    assert_eq!(queue.element(), Ok(&'a'), "A queue should inspect its head.");
    assert_eq!(Queue::peek(&queue), Some(&'a'));
    assert_eq!(Queue::remove(&mut queue), Ok('a'), "A queue should be first in first out.");
    assert_eq!(queue.poll(), Some('b'));
    assert_eq!(Queue::remove(&mut queue), Err(NoSuchElement));
    assert_eq!(queue.element(), Err(NoSuchElement));
    assert!(Queue::is_empty(&queue));

    let mut stack = LinkedList::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek_first(), Some(&2), "Pushing should add to the front.");
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(NoSuchElement));

    let deque = LinkedList::from([1, 2, 3]);
    assert!(Deque::descending_iter(&deque).copied().eq([3, 2, 1]));
    assert_eq!(Queue::len(&deque), 3);
}

#[test]
fn test_indexing() {
    let mut list: LinkedList<i32> = (0..10).collect();

    for (index, expected) in (0..10).enumerate() {
        assert_eq!(list[index], expected, "Seeking from either end should find the right node.");
    }
    assert_eq!(list.try_get(10), Err(IndexOutOfBounds { index: 10, len: 10 }));
    assert_panics!({ list.get(10) });

    assert_eq!(list.set(7, 70), 7);
    list[2] = 20;
    assert_eq!(list.get(7), &70);
    assert_eq!(list.get(2), &20);

    list.insert(0, -1);
    list.insert(11, 100);
    list.insert(5, 50);
    list.verify_double_links();
    assert_eq!(list.len(), 13);
    assert_eq!(list.get_first(), Ok(&-1));
    assert_eq!(list.get_last(), Ok(&100));
    assert_eq!(list[5], 50);
    assert_eq!(
        list.try_insert(14, 0),
        Err(IndexOrCapOverflow::IndexOutOfBounds(IndexOutOfBounds { index: 14, len: 13 }))
    );

    assert_eq!(list.remove_at(5), 50);
    assert_eq!(list.remove_at(11), 100);
    assert_eq!(list.remove_at(0), -1);
    assert_eq!(list.try_remove_at(10), Err(IndexOutOfBounds { index: 10, len: 10 }));
    list.verify_double_links();
    assert_eq!(list, LinkedList::from([0, 1, 20, 3, 4, 5, 6, 70, 8, 9]));

    let mut empty = LinkedList::<u8>::new();
    assert_eq!(empty.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    empty.insert(0, 1);
    assert_eq!(empty, LinkedList::from([1]), "Inserting at 0 should work on an empty list.");
}

#[test]
fn test_occurrences() {
    let mut list = LinkedList::from([Some(1), None, Some(2), None, Some(1)]);

    assert_eq!(list.index_of(&None), Some(1));
    assert_eq!(list.last_index_of(&None), Some(3));
    assert_eq!(list.last_index_of(&Some(3)), None);
    assert!(list.contains(&Some(2)));

    assert!(list.remove_last_occurrence(&Some(1)));
    assert_eq!(list, LinkedList::from([Some(1), None, Some(2), None]));
    assert!(list.remove_first_occurrence(&None));
    assert_eq!(list, LinkedList::from([Some(1), Some(2), None]));
    assert!(list.remove_item(&Some(1)));
    assert!(!list.remove_item(&Some(1)), "Nothing should be removed when nothing matches.");
    list.verify_double_links();
    assert_eq!(list, LinkedList::from([Some(2), None]));
}

#[test]
fn test_insert_all() {
    let mut list = LinkedList::from([1, 5]);
    assert!(list.insert_all(1, [2, 3, 4]));
    assert!(list.insert_all(0, [-1, 0]));
    assert!(list.add_all([6, 7]));
    assert!(!list.add_all(iter::empty()));
    list.verify_double_links();
    assert!(list.iter().copied().eq(-1..=7), "Inserted runs should keep their order.");

    let snapshot: Vec<_> = list.iter().copied().collect();
    list.insert_all(3, snapshot);
    assert_eq!(list.len(), 18, "Adding a snapshot of self should double the list.");
    list.verify_double_links();

    assert_panics!({ list.insert_all(19, [0]) });

    let mut empty = LinkedList::new();
    assert!(empty.insert_all(0, ['a', 'b']));
    assert_eq!(empty, LinkedList::from(['a', 'b']));
}

#[test]
fn test_slot_reuse() {
    let mut list: LinkedList<_> = (0..8).collect();
    let slots = list.arena.slots.len();

    for i in 0..100 {
        list.remove_first().unwrap();
        list.add_last(i);
    }

    assert_eq!(
        list.arena.slots.len(),
        slots,
        "Removed nodes should have their slots reused."
    );
    list.verify_double_links();

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.arena.free, None, "Clearing should forget the free list.");
    list.add_first(1);
    assert_eq!(list, LinkedList::from([1]));
}

#[test]
fn test_cursor_traversal() -> Result<(), CursorError> {
    let list = LinkedList::from([1, 2, 3]);
    let mut cursor = list.cursor();

    assert!(!cursor.has_previous(&list));
    assert_eq!(cursor.next(&list)?, &1);
    assert_eq!(cursor.next(&list)?, &2);
    assert_eq!(cursor.next(&list)?, &3);
    assert!(!cursor.has_next(&list));
    assert_eq!(cursor.next(&list), Err(NoSuchElement.into()));
    assert_eq!(cursor.previous(&list)?, &3, "Previous at the end should return the tail.");
    assert_eq!(cursor.previous(&list)?, &2);
    assert_eq!(cursor.previous_index(), Some(0));

    let mut cursor = list.cursor_at(2);
    assert_eq!(cursor.next(&list)?, &3);
    assert!(list.try_cursor_at(4).is_err());

    let mut descending = list.descending_cursor();
    let mut seen = Vec::new();
    while descending.has_next(&list) {
        seen.push(*descending.next(&list)?);
    }
    assert_eq!(seen, [3, 2, 1], "A descending cursor should walk from back to front.");

    let empty = LinkedList::<u8>::new();
    let mut cursor = empty.cursor();
    assert_eq!(cursor.next(&empty), Err(NoSuchElement.into()));
    assert_eq!(cursor.previous(&empty), Err(NoSuchElement.into()));
    Ok(())
}

#[test]
fn test_cursor_modification() -> Result<(), CursorError> {
    let mut list = LinkedList::from([1, 2, 3, 4, 5]);
    let mut cursor = list.cursor();

    assert_eq!(cursor.remove(&mut list), Err(IllegalState.into()));

    while cursor.has_next(&list) {
        if cursor.next(&list)? % 2 == 0 {
            cursor.remove(&mut list)?;
        }
    }
    list.verify_double_links();
    assert_eq!(list, LinkedList::from([1, 3, 5]), "Removing through a cursor should be safe.");
    assert_eq!(cursor.next_index(), 3);

    assert_eq!(cursor.previous(&list)?, &5);
    assert_eq!(cursor.set(&mut list, 50)?, 5);
    assert_eq!(cursor.previous(&list)?, &3);
    assert_eq!(cursor.remove(&mut list)?, 3, "Removing after previous should work.");
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.next(&list)?, &50);

    cursor.insert(&mut list, 60)?;
    assert!(!cursor.has_next(&list), "Inserting at the end should move past the new element.");
    assert_eq!(cursor.previous(&list)?, &60);
    assert_eq!(cursor.set(&mut list, 0)?, 60);

    let mut cursor = list.cursor();
    cursor.insert(&mut list, 0)?;
    assert_eq!(cursor.next(&list)?, &1, "Inserting shouldn't affect the next element.");
    list.verify_double_links();
    assert_eq!(list, LinkedList::from([0, 1, 50, 0]));

    let mut cursor = list.cursor();
    while cursor.has_next(&list) {
        cursor.next(&list)?;
        cursor.remove(&mut list)?;
    }
    assert!(list.is_empty(), "A cursor should be able to remove everything.");
    cursor.insert(&mut list, 1)?;
    assert_eq!(list, LinkedList::from([1]));
    Ok(())
}

#[test]
fn test_descending_cursor_removal() -> Result<(), CursorError> {
    let mut list: LinkedList<_> = (1..=6).collect();
    let mut descending = list.descending_cursor();

    assert_eq!(descending.remove(&mut list), Err(IllegalState.into()));

    while descending.has_next(&list) {
        if descending.next(&list)? % 3 == 0 {
            descending.remove(&mut list)?;
        }
    }
    list.verify_double_links();
    assert_eq!(list, LinkedList::from([1, 2, 4, 5]), "Removing while descending should be safe.");
    assert_eq!(descending.into_inner().next_index(), 0);

    let mut descending = list.descending_cursor();
    while descending.has_next(&list) {
        descending.next(&list)?;
        descending.remove(&mut list)?;
    }
    assert!(list.is_empty(), "A descending cursor should be able to remove everything.");
    Ok(())
}

#[test]
fn test_cursor_fail_fast() -> Result<(), CursorError> {
    let mut list = LinkedList::from([1, 2, 3]);
    let mut cursor = list.cursor();
    cursor.next(&list)?;

    list.set(1, 20);
    assert_eq!(cursor.next(&list)?, &20, "Set isn't a structural modification.");

    list.add_last(4);
    assert_eq!(cursor.next(&list), Err(ConcurrentModification.into()));
    assert_eq!(cursor.previous(&list), Err(ConcurrentModification.into()));
    assert_eq!(cursor.set(&mut list, 0), Err(ConcurrentModification.into()));
    assert_eq!(cursor.remove(&mut list), Err(ConcurrentModification.into()));
    assert_eq!(cursor.insert(&mut list, 0), Err(ConcurrentModification.into()));
    assert_eq!(list, LinkedList::from([1, 20, 3, 4]), "A stale cursor shouldn't modify.");

    let mut cursor = list.cursor();
    cursor.next(&list)?;
    list.clear();
    list.add_last(1);
    assert!(
        cursor.remove(&mut list).is_err_and(|error| error.is_concurrent_modification()),
        "A cursor shouldn't use nodes from before a clear."
    );
    Ok(())
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from([1, 2, 3, 4]);

    assert!(list.descending_iter().copied().eq([4, 3, 2, 1]));
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 2);
    assert!(iter.clone().eq(iter), "Cloned iterators should agree.");

    for item in &mut list {
        *item *= 10;
    }
    let mut iter_mut = list.iter_mut();
    let first = iter_mut.next();
    let last = iter_mut.next_back();
    if let (Some(first), Some(last)) = (first, last) {
        std::mem::swap(first, last);
    }
    assert_eq!(iter_mut.count(), 2);
    assert_eq!(list, LinkedList::from([40, 20, 30, 10]));

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next_back(), Some(10));
    assert_eq!(into_iter.len(), 3);
    assert_eq!(into_iter.collect::<Vec<_>>(), [40, 20, 30]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list.remove_at(4));
    drop(list.poll_first());
    assert_eq!(counter.drops(), 2);

    list.clear();
    assert_eq!(counter.drops(), 10, "Clearing should drop every element.");

    list.extend(iter::repeat_with(|| counter.clone()).take(5));
    let cloned = list.clone();
    drop(list);
    drop(cloned);
    assert_eq!(counter.drops(), 20, "Every element should be dropped exactly once.");
}

#[test]
fn test_zst_support() {
    let mut list = LinkedList::new();
    for _ in 0..10 {
        list.add_last(ZeroSizedType);
    }

    assert_eq!(list.len(), 10);
    assert_eq!(list.remove_at(5), ZeroSizedType);
    assert_eq!(list.iter().count(), 9);
}

#[test]
fn test_formatting_and_equality() {
    let list = LinkedList::from([1, 2, 3]);

    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(LinkedList::<u8>::new().to_string(), "[]");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");

    let mut other = LinkedList::from([0, 1, 2, 3]);
    other.remove_first().unwrap();
    assert_eq!(list, other, "Arena layout shouldn't affect equality.");
    assert_ne!(list, LinkedList::from([1, 2]));
    assert_eq!(&*list.to_array(), &[1, 2, 3]);
}

#[derive(Debug, Clone)]
enum Operation {
    AddFirst(u8),
    AddLast(u8),
    PollFirst,
    PollLast,
    Insert(usize, u8),
    RemoveAt(usize),
    RemoveFirstOccurrence(u8),
    RemoveLastOccurrence(u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u8>().prop_map(Operation::AddFirst),
        any::<u8>().prop_map(Operation::AddLast),
        Just(Operation::PollFirst),
        Just(Operation::PollLast),
        (any::<usize>(), any::<u8>()).prop_map(|(index, value)| Operation::Insert(index, value)),
        any::<usize>().prop_map(Operation::RemoveAt),
        (0_u8..8).prop_map(Operation::RemoveFirstOccurrence),
        (0_u8..8).prop_map(Operation::RemoveLastOccurrence),
    ]
}

proptest! {
    #[test]
    fn test_matches_deque_model(operations in prop::collection::vec(operation(), 0..200)) {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();

        for operation in operations {
            match operation {
                Operation::AddFirst(value) => {
                    list.add_first(value);
                    model.push_front(value);
                },
                Operation::AddLast(value) => {
                    list.add_last(value);
                    model.push_back(value);
                },
                Operation::PollFirst => {
                    prop_assert_eq!(list.poll_first(), model.pop_front());
                },
                Operation::PollLast => {
                    prop_assert_eq!(list.poll_last(), model.pop_back());
                },
                Operation::Insert(index, value) => {
                    let index = index % (model.len() + 1);
                    list.insert(index, value);
                    model.insert(index, value);
                },
                Operation::RemoveAt(index) => {
                    if model.is_empty() {
                        prop_assert!(list.try_remove_at(index).is_err());
                    } else {
                        let index = index % model.len();
                        prop_assert_eq!(Some(list.remove_at(index)), model.remove(index));
                    }
                },
                Operation::RemoveFirstOccurrence(value) => {
                    let expected = model.iter().position(|item| *item == value);
                    if let Some(index) = expected {
                        model.remove(index);
                    }
                    prop_assert_eq!(list.remove_first_occurrence(&value), expected.is_some());
                },
                Operation::RemoveLastOccurrence(value) => {
                    let expected = model.iter().rposition(|item| *item == value);
                    if let Some(index) = expected {
                        model.remove(index);
                    }
                    prop_assert_eq!(list.remove_last_occurrence(&value), expected.is_some());
                },
            }

            list.verify_double_links();
            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.iter().eq(model.iter()));
            prop_assert!(list.descending_iter().eq(model.iter().rev()));
        }
    }
}
