use thiserror::Error;

#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("priority queue is corrupt: {0}")]
    Corrupt(#[from] Corruption),
}

impl Error {
    /// Returns true if this error came from an internal consistency check,
    /// rather than from a caller misusing the queue.
    pub fn is_corruption(&self) -> bool {
        match self {
            Error::Corrupt(_) => true,
            Error::EmptyQueue => false,
        }
    }
}

/// Describes which structural invariant a queue found broken.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Corruption {
    #[error("{count} elements stored in a buffer of capacity {capacity}")]
    Overfilled { count: usize, capacity: usize },

    #[error("elements out of order at index {index}")]
    OutOfOrder { index: usize },

    #[error("heap order violated below index {index}")]
    HeapOrder { index: usize },
}
