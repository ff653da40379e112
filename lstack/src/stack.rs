use std::{
    fmt,
    iter::{FromIterator, FusedIterator},
    mem,
};

use log::{debug, trace};

use crate::{
    error::{Result, StackError},
    node::{unlink, Link, Node},
};

////////////////////////////////////////////////////////////////////////////////

/// A last-in-first-out stack over a singly linked chain of boxed nodes.
///
/// Every node is owned by exactly one link: the stack owns the head, each node
/// owns the one below it. `len` always equals the number of nodes in the chain.
///
/// The stack does no locking. Share it across threads only behind your own
/// `Mutex` or similar.
pub struct Stack<T> {
    head: Link<T>,
    size: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        self.head = Some(Node::new(value, self.head.take()));
        self.size += 1;
    }

    /// Removes the top element, or returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.size -= 1;
            node.value
        })
    }

    /// Removes and returns the top element.
    ///
    /// Fails with [`StackError::EmptyContainer`] on an empty stack, leaving it untouched.
    pub fn top(&mut self) -> Result<T> {
        self.pop().ok_or_else(|| underflow("top"))
    }

    pub fn peek(&self) -> Result<&T> {
        match self.head {
            Some(ref node) => Ok(&node.value),
            None => Err(underflow("peek")),
        }
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        match self.head {
            Some(ref mut node) => Ok(&mut node.value),
            None => Err(underflow("peek_mut")),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        trace!("clearing stack of {} elements", self.size);
        unlink(self.head.take());
        self.size = 0;
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Copies the elements into a `Vec`, top first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Reverses the chain in place by relinking the existing nodes.
    pub fn reverse(&mut self) {
        trace!("reversing stack of {} elements", self.size);
        let mut prev: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = mem::replace(&mut node.next, prev);
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Moves every element out, top first, leaving the stack empty.
    pub fn pop_all(&mut self) -> Vec<T> {
        trace!("draining stack of {} elements", self.size);
        let mut values = Vec::with_capacity(self.size);
        while let Some(value) = self.pop() {
            values.push(value);
        }
        values
    }

    /// Iterates from top to bottom.
    ///
    /// The iterator borrows the stack, so the stack can't be mutated until the
    /// iterator is dropped. Each call starts a fresh walk from the current head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
            remaining: self.size,
        }
    }
}

fn underflow(op: &str) -> StackError {
    debug!("{op}() called on an empty stack");
    StackError::EmptyContainer
}

////////////////////////////////////////////////////////////////////////////////

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        unlink(self.head.take());
    }
}

impl<T: Clone> Clone for Stack<T> {
    /// Builds a fresh chain holding clones of the values, in the same order.
    fn clone(&self) -> Self {
        let mut values = self.to_vec();
        values.reverse();
        values.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> From<Stack<T>> for Vec<T> {
    fn from(mut stack: Stack<T>) -> Self {
        stack.pop_all()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

////////////////////////////////////////////////////////////////////////////////

/// Owning iterator, pops values top to bottom.
pub struct IntoIter<T>(Stack<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

////////////////////////////////////////////////////////////////////////////////
