use log::debug;

pub mod array_queue;
pub mod data_point;
pub mod error;
pub mod heap_queue;


pub use crate::array_queue::ArrayPriorityQueue;
pub use crate::data_point::DataPoint;
pub use crate::error::{Corruption, Error};
pub use crate::heap_queue::HeapPriorityQueue;

/// A minimum-priority queue of `DataPoint` records.
///
/// `dequeue` and `peek` always yield the record with the smallest `priority`
/// currently stored. Records with equal priority come out in whatever order the
/// implementation finds them.
pub trait PriorityQueue {
    fn enqueue(&mut self, elem: DataPoint);

    /// Removes and returns the most urgent record.
    fn dequeue(&mut self) -> Result<DataPoint, Error>;

    /// Returns the most urgent record without removing it.
    fn peek(&self) -> Result<&DataPoint, Error>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Forgets all records. The allocated buffer is kept.
    fn clear(&mut self);

    /// Checks the structural invariant of the queue. Intended for tests and
    /// debugging; an `Err` here means the queue itself is broken.
    fn validate_internal_state(&self) -> Result<(), Error>;

    /// Renders the occupied slots, one per line, under a caller-supplied heading.
    /// The format is for humans and is not stable.
    fn debug_dump(&self, msg: &str) -> String;

    fn log_debug_info(&self, msg: &str) {
        debug!("{}", self.debug_dump(msg));
    }
}
