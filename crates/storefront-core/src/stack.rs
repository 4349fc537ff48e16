//! # Stack
//!
//! A generic last-in, first-out container.

use crate::error::{CoreError, CoreResult};

/// LIFO container backed by a `Vec`.
///
/// ```rust
/// use storefront_core::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.pop().unwrap(), 2);
/// assert_eq!(stack.size(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> CoreResult<T> {
        self.items.pop().ok_or(CoreError::EmptyStack)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> CoreResult<&T> {
        self.items.last().ok_or(CoreError::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_adds_item() {
        let mut stack = Stack::new();
        stack.push(1);
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_pop_removes_top_item() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut stack: Stack<i32> = Stack::new();
        let err = stack.pop().unwrap_err();
        assert_eq!(err, CoreError::EmptyStack);
        assert!(err.to_string().to_lowercase().contains("empty"));
    }

    #[test]
    fn test_peek_returns_top_without_removing() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_peek_empty_fails() {
        let stack: Stack<&str> = Stack::default();
        assert_eq!(stack.peek(), Err(CoreError::EmptyStack));
    }

    #[test]
    fn test_is_empty() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push("item");
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        stack.clear();

        assert_eq!(stack.size(), 0);
        assert!(stack.pop().is_err());
    }

    proptest! {
        /// Popping everything returns the pushes in reverse order.
        #[test]
        fn pops_in_reverse_push_order(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut stack = Stack::new();
            for item in &items {
                stack.push(*item);
            }
            prop_assert_eq!(stack.size(), items.len());

            let mut popped = Vec::with_capacity(items.len());
            while let Ok(item) = stack.pop() {
                popped.push(item);
            }

            let mut expected = items.clone();
            expected.reverse();
            prop_assert_eq!(popped, expected);
            prop_assert!(stack.is_empty());
        }
    }
}
