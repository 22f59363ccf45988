use crate::data_point::DataPoint;
use crate::error::{Corruption, Error};
use crate::PriorityQueue;
use core::fmt::{Debug, Formatter, Write};
use log::{debug, error};

pub const ARRAY_INITIAL_CAPACITY: usize = 10;

/// A priority queue kept as a fully sorted array.
///
/// Elements are stored in descending order of priority, so the least urgent
/// element is at index 0 and the most urgent is in the last occupied slot.
/// `peek` and `dequeue` are O(1); `enqueue` is O(n), since it shifts the new
/// element down to its place.
pub struct ArrayPriorityQueue {
    /// The allocated buffer. Its length is the capacity; only the first
    /// `count` slots hold live elements.
    elements: Box<[DataPoint]>,
    count: usize,
}

impl ArrayPriorityQueue {
    pub fn new() -> Self {
        Self::with_capacity(ARRAY_INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: empty_buffer(capacity.max(1)),
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        debug!("growing array queue from {} to {}", old_capacity, new_capacity);
        let old = core::mem::replace(&mut self.elements, empty_buffer(new_capacity));
        let live = old.into_vec().into_iter().take(self.count);
        for (slot, elem) in self.elements.iter_mut().zip(live) {
            *slot = elem;
        }
    }

    fn live(&self) -> &[DataPoint] {
        &self.elements[..self.count]
    }
}

fn empty_buffer(capacity: usize) -> Box<[DataPoint]> {
    vec![DataPoint::default(); capacity].into_boxed_slice()
}

impl Default for ArrayPriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityQueue for ArrayPriorityQueue {
    /// Appends `elem` and then does a single insertion-sort pass from the tail,
    /// stopping at the first pair that is already in order.
    fn enqueue(&mut self, elem: DataPoint) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.elements[self.count] = elem;
        let mut i = self.count;
        while i > 0 && self.elements[i - 1].priority < self.elements[i].priority {
            self.elements.swap(i - 1, i);
            i -= 1;
        }
        self.count += 1;
    }

    fn dequeue(&mut self) -> Result<DataPoint, Error> {
        if self.count == 0 {
            return Err(Error::EmptyQueue);
        }
        self.count -= 1;
        Ok(core::mem::take(&mut self.elements[self.count]))
    }

    fn peek(&self) -> Result<&DataPoint, Error> {
        self.live().last().ok_or(Error::EmptyQueue)
    }

    fn size(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        self.count = 0;
    }

    fn validate_internal_state(&self) -> Result<(), Error> {
        if self.count > self.capacity() {
            return Err(Corruption::Overfilled {
                count: self.count,
                capacity: self.capacity(),
            }
            .into());
        }
        for i in 1..self.count {
            if self.elements[i].priority > self.elements[i - 1].priority {
                error!("{}", self.debug_dump("validate_internal_state"));
                return Err(Corruption::OutOfOrder { index: i }.into());
            }
        }
        Ok(())
    }

    fn debug_dump(&self, msg: &str) -> String {
        let mut s = String::from(msg);
        for (i, elem) in self.live().iter().enumerate() {
            drop(write!(s, "\n[{}] = {}", i, elem));
        }
        s
    }
}

impl Debug for ArrayPriorityQueue {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "PQ: ")?;
        for item in self.live().iter() {
            write!(fmt, "{} ", item)?;
        }
        Ok(())
    }
}
