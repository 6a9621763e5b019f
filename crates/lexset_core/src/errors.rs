use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Alloc: {0}")]
    OutOfMemory(#[from] std::collections::TryReserveError),

    #[error("Word of {len} bytes exceeds the {max} byte limit")]
    WordTooLong { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, LexError>;
