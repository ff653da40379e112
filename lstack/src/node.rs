pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One cell of the chain. Owned by the stack (for the head) or by the node above it.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    #[cfg(test)]
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Self::new(value, None)
    }
}

/// Releases a chain one node at a time, so that deep chains don't recurse in `Box::drop`.
pub(crate) fn unlink<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

////////////////////////////////////////////////////////////////////////////////
