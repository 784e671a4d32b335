//! A plain LIFO container.
//!
//! `Stack` knows nothing about components: values are inert and are never
//! dropped early or reset while they sit on the stack.

use crate::error::{Result, StackUnderflowSnafu};
use snafu::OptionExt;

/// A last-in-first-out stack.
///
/// Cloning (when `T: Clone`) produces an independent handle: pushes and pops
/// on one copy are never visible through another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    // Bottom of the stack is index 0.
    frames: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Build a stack laid out top-down: the first element of `values` becomes
    /// the top, the last becomes the bottom.
    ///
    /// Note this is the reverse of pushing the same values one at a time.
    pub fn from_top_down<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut frames: Vec<T> = values.into_iter().collect();
        frames.reverse();
        Self { frames }
    }

    /// Push a value; it becomes the new top.
    pub fn push(&mut self, value: T) {
        self.frames.push(value);
    }

    /// Remove and return the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.frames.pop()
    }

    /// The top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.frames.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.frames.last_mut()
    }

    /// Replace the value of the top frame in place and return the old value.
    ///
    /// Depth is unchanged. Fails with [`Error::StackUnderflow`](crate::Error)
    /// on an empty stack, leaving it untouched.
    pub fn swap(&mut self, value: T) -> Result<T> {
        let top = self.frames.last_mut().context(StackUnderflowSnafu)?;
        Ok(std::mem::replace(top, value))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate from the top frame down to the bottom one.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.frames.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_push_peek_pop() {
        let mut stack = Stack::new();
        stack.push(17);

        assert_eq!(stack.peek(), Some(&17));
        assert_eq!(stack.pop(), Some(17));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_swap_keeps_depth() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.swap(3).unwrap(), 2);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_swap_on_empty_is_underflow() {
        let mut stack: Stack<i32> = Stack::new();

        assert!(matches!(stack.swap(5), Err(Error::StackUnderflow)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_pop_and_peek() {
        let mut stack: Stack<i32> = Stack::new();

        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_pop_pop() {
        let mut stack = Stack::new();
        stack.push("first");
        stack.push("second");

        stack.pop();
        assert_eq!(stack.pop(), Some("first"));
    }

    #[test]
    fn test_clone_is_independent_after_pop() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        let mut copy = stack.clone();
        assert_eq!(copy.pop(), Some(2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(copy.pop(), Some(1));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_clone_is_independent_after_push() {
        let mut stack = Stack::new();
        let mut copy = stack.clone();

        stack.push(1);
        copy.push(2);

        assert_eq!(stack.pop(), Some(1));
        assert_eq!(copy.pop(), Some(2));
    }

    #[test]
    fn test_from_top_down_order() {
        let mut stack = Stack::from_top_down([10, 20, 30]);

        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(30));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_pushing_in_order_inverts_from_top_down() {
        let mut pushed = Stack::new();
        for v in [10, 20, 30] {
            pushed.push(v);
        }

        assert_ne!(pushed, Stack::from_top_down([10, 20, 30]));
        assert_eq!(pushed, Stack::from_top_down([30, 20, 10]));
    }
}
