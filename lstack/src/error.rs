use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("empty stack")]
    EmptyContainer,
}

pub type Result<T> = std::result::Result<T, StackError>;
