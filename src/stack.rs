// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::FromIterator;

use tracing::trace;

use crate::counter::Counter;
use crate::error::EmptyContainerError;
use crate::node::Node;
use crate::types::Link;

/// A last in, first out stack built from a chain of uniquely owned nodes.
///
/// # Example
///
/// ```rust
/// # use linkstack::Stack;
/// let mut stack = Stack::new();
/// stack.push("A");
/// stack.push("B");
/// assert_eq!(Ok("B"), stack.pop());
/// assert_eq!(Ok(&"A"), stack.peek());
/// assert_eq!(1, stack.len());
/// ```
pub struct Stack<A> {
    head: Link<A>,
    count: usize,
}

impl<A> Stack<A> {
    /// Construct an empty stack.
    ///
    /// This doesn't allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let stack: Stack<String> = Stack::new();
    /// assert!(stack.is_empty());
    /// assert_eq!(0, stack.len());
    /// ```
    pub fn new() -> Self {
        Self {
            head: None,
            count: Default::default(),
        }
    }

    /// Get the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.count.count()
    }

    /// Test whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count.count() == 0
    }

    /// Push a value onto the top of the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push("X".to_string());
    /// assert_eq!(1, stack.len());
    /// assert_eq!("X", *stack.peek().unwrap());
    /// ```
    pub fn push(&mut self, value: A) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.count.inc();
        self.check_invariants();
    }

    /// Remove the top value from the stack and return it.
    ///
    /// Fails with [`EmptyContainerError`][EmptyContainerError] if the stack is
    /// empty, in which case the stack is left as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::{EmptyContainerError, Stack};
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(Ok(2), stack.pop());
    /// assert_eq!(Ok(1), stack.pop());
    /// assert_eq!(Err(EmptyContainerError), stack.pop());
    /// ```
    ///
    /// [EmptyContainerError]: struct.EmptyContainerError.html
    pub fn pop(&mut self) -> Result<A, EmptyContainerError> {
        match self.unlink_head() {
            Some(node) => Ok(node.into_data()),
            None => {
                trace!("pop on an empty stack");
                Err(EmptyContainerError)
            }
        }
    }

    /// Get a reference to the top value without removing it.
    ///
    /// Fails with [`EmptyContainerError`][EmptyContainerError] if the stack is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::{EmptyContainerError, Stack};
    /// let mut stack = Stack::new();
    /// assert_eq!(Err(EmptyContainerError), stack.peek());
    /// stack.push("Hello");
    /// assert_eq!(Ok(&"Hello"), stack.peek());
    /// ```
    ///
    /// [EmptyContainerError]: struct.EmptyContainerError.html
    pub fn peek(&self) -> Result<&A, EmptyContainerError> {
        match self.head.as_deref() {
            Some(node) => Ok(&node.data),
            None => {
                trace!("peek on an empty stack");
                Err(EmptyContainerError)
            }
        }
    }

    /// Get a mutable reference to the top value without removing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// *stack.peek_mut().unwrap() += 1;
    /// assert_eq!(Ok(2), stack.pop());
    /// ```
    pub fn peek_mut(&mut self) -> Result<&mut A, EmptyContainerError> {
        match self.head.as_deref_mut() {
            Some(node) => Ok(&mut node.data),
            None => {
                trace!("peek_mut on an empty stack");
                Err(EmptyContainerError)
            }
        }
    }

    /// Remove every element from the stack.
    ///
    /// Nodes are unlinked and dropped one at a time, so erasing a very long
    /// stack won't recurse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::{EmptyContainerError, Stack};
    /// let mut stack: Stack<_> = vec!["A", "B", "C"].into_iter().collect();
    /// stack.erase();
    /// assert!(stack.is_empty());
    /// assert_eq!(Err(EmptyContainerError), stack.pop());
    /// ```
    #[doc(alias = "clear")]
    pub fn erase(&mut self) {
        if !self.is_empty() {
            trace!(len = self.len(), "erasing stack");
        }
        while !self.is_empty() {
            self.unlink_head();
        }
    }

    fn unlink_head(&mut self) -> Option<Box<Node<A>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.count.dec();
        self.check_invariants();
        Some(node)
    }

    /// Walk the values from the top of the stack to the bottom.
    fn values(&self) -> impl Iterator<Item = &A> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.data)
    }

    /// Append clones of `source`'s values below our own, top first.
    ///
    /// Each node is counted as soon as it's linked in, so a panicking
    /// `clone()` leaves us with a shorter but consistent stack.
    fn copy_from(&mut self, source: &Self)
    where
        A: Clone,
    {
        debug_assert!(self.is_empty());
        if source.is_empty() {
            return;
        }
        trace!(len = source.len(), "copying stack");
        let mut tail = &mut self.head;
        for value in source.values() {
            let node = tail.insert(Box::new(Node::new(value.clone())));
            self.count.inc();
            tail = &mut node.next;
        }
        self.check_invariants();
    }

    #[inline(always)]
    fn check_invariants(&self) {
        debug_assert_eq!(self.count.count() == 0, self.head.is_none());
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Drop for Stack<A> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<A> Clone for Stack<A>
where
    A: Clone,
{
    /// Make a deep copy of the stack.
    ///
    /// Every node is freshly allocated, and the copy holds its values in the
    /// same order as the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push("Hello".to_string());
    /// let copy = stack.clone();
    /// stack.push("World".to_string());
    /// assert_eq!(1, copy.len());
    /// assert_eq!("Hello", *copy.peek().unwrap());
    /// ```
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.copy_from(self);
        copy
    }

    /// Replace the contents of the stack with a deep copy of `source`.
    ///
    /// The existing elements are erased before anything is copied.
    fn clone_from(&mut self, source: &Self) {
        self.erase();
        self.copy_from(source);
    }
}

impl<A> PartialEq for Stack<A>
where
    A: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<A> Eq for Stack<A> where A: Eq {}

impl<A> Extend<A> for Stack<A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<A> FromIterator<A> for Stack<A> {
    /// Build a stack by pushing each value in turn, so the last one ends up on
    /// top.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<A> Debug for Stack<A>
where
    A: Debug,
{
    /// Debug implementation for `Stack`, listing values from the top down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use linkstack::Stack;
    /// let stack: Stack<_> = vec!["a", "b", "c"].into_iter().collect();
    /// assert_eq!(r#"Stack["c", "b", "a"]"#, format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str("Stack")?;
        f.debug_list().entries(self.values()).finish()
    }
}
