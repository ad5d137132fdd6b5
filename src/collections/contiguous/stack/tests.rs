#![cfg(test)]

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::util::alloc::CountedDrop;

#[test]
fn test_push_pop_order() {
    let mut stack = Stack::new();
    for i in 1..=4 {
        assert_eq!(stack.push(i), &i, "Push should return the pushed element.");
    }

    assert_eq!(stack.peek(), Ok(&4));
    assert_eq!(stack.pop(), Ok(4), "The last pushed element should be popped first.");
    assert_eq!(stack.to_string(), "[1, 2, 3]");
    assert_eq!(stack.search(&1), Some(3), "The bottom should be 3 away from the top.");
    assert_eq!(stack.search(&3), Some(1), "The top should be at distance 1.");
    assert_eq!(stack.search(&4), None);

    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
}

#[test]
fn test_empty_stack() {
    let mut stack = Stack::<u8>::new();

    assert_eq!(stack.pop(), Err(EmptyStack));
    assert_eq!(stack.peek(), Err(EmptyStack));
    assert_eq!(stack.peek_mut(), Err(EmptyStack));
    assert_eq!(stack.search(&0), None);

    stack.push(1);
    stack.clear();
    assert_eq!(stack.pop(), Err(EmptyStack), "A cleared stack should be empty.");
}

#[test]
fn test_search_duplicates() {
    let stack: Stack<_> = ['a', 'b', 'a', 'c'].into_iter().collect();

    assert_eq!(stack.search(&'a'), Some(2), "The nearest occurrence to the top should be used.");
    assert!(stack.contains(&'b'));
    assert!(!stack.contains(&'z'));
}

#[test]
fn test_peek_mut() {
    let mut stack = Stack::from(ArrayList::from([1, 2]));
    if let Ok(top) = stack.peek_mut() {
        *top = 20;
    }

    assert_eq!(stack.as_list(), &ArrayList::from([1, 20]));
    assert!(stack.iter().copied().eq([1, 20]), "Iteration should go from bottom to top.");
    assert_eq!(stack.into_list(), ArrayList::from([1, 20]));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut stack = Stack::with_cap(3);
    stack.extend([counter.clone(), counter.clone(), counter.clone()]);

    drop(stack.pop());
    assert_eq!(counter.drops(), 1);

    drop(stack);
    assert_eq!(counter.drops(), 3, "Every element should be dropped exactly once.");
}
