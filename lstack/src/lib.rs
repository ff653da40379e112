#![forbid(unsafe_code)]

//! A LIFO stack stored as a singly linked chain of owned nodes.

mod error;
mod node;
mod stack;

pub use error::{Result, StackError};
pub use stack::{IntoIter, Iter, Stack};
