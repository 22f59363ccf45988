use crate::data_point::DataPoint;
use crate::error::{Corruption, Error};
use crate::PriorityQueue;
use core::fmt::{Debug, Formatter, Write};
use log::{debug, error};

pub const HEAP_INITIAL_CAPACITY: usize = 8;

/// A priority queue stored as an implicit binary min-heap.
///
/// The children of slot `i` are slots `2i + 1` and `2i + 2`. Every parent has a
/// priority no greater than either of its children, so the most urgent element
/// is always at the root.
pub struct HeapPriorityQueue {
    /// The allocated buffer. Its length is the capacity; only the first
    /// `count` slots are part of the heap.
    elements: Box<[DataPoint]>,
    count: usize,
}

impl HeapPriorityQueue {
    pub fn new() -> Self {
        Self::with_capacity(HEAP_INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: vec![DataPoint::default(); capacity.max(1)].into_boxed_slice(),
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        debug!("growing heap queue from {} to {}", self.capacity(), new_capacity);
        let mut grown = vec![DataPoint::default(); new_capacity].into_boxed_slice();
        for (slot, elem) in grown.iter_mut().zip(self.elements[..self.count].iter_mut()) {
            *slot = core::mem::take(elem);
        }
        self.elements = grown;
    }

    fn parent_index(&self, child: usize) -> Option<usize> {
        if child < 1 {
            None
        } else {
            Some((child - 1) / 2)
        }
    }

    fn left_child_index(&self, parent: usize) -> Option<usize> {
        let left = parent * 2 + 1;
        if left < self.count {
            Some(left)
        } else {
            None
        }
    }

    fn right_child_index(&self, parent: usize) -> Option<usize> {
        let right = parent * 2 + 2;
        if right < self.count {
            Some(right)
        } else {
            None
        }
    }

    fn priority(&self, index: usize) -> f64 {
        self.elements[index].priority
    }

    // Walks all the way to the root; a swap is made only where the parent is
    // less urgent than the element below it.
    fn sift_up(&mut self, mut child: usize) {
        while let Some(parent) = self.parent_index(child) {
            if self.priority(parent) > self.priority(child) {
                self.elements.swap(parent, child);
            }
            child = parent;
        }
    }

    fn sift_down(&mut self, parent: usize) {
        let left = match self.left_child_index(parent) {
            Some(left) => left,
            None => return,
        };
        let right = match self.right_child_index(parent) {
            Some(right) => right,
            None => {
                // Only a left child. In a complete tree it must be a leaf.
                if self.priority(parent) > self.priority(left) {
                    self.elements.swap(parent, left);
                }
                return;
            }
        };
        let min_child = if self.priority(left) < self.priority(right) {
            left
        } else {
            right
        };
        if self.priority(parent) > self.priority(min_child) {
            self.elements.swap(parent, min_child);
            self.sift_down(min_child);
        }
    }

    // Both edges below `parent` are checked before either subtree is entered,
    // so a broken parent is reported ahead of anything beneath it.
    fn check_subtree(&self, parent: usize) -> Result<(), Corruption> {
        let children = [self.left_child_index(parent), self.right_child_index(parent)];
        for &child in children.iter().flatten() {
            if self.priority(parent) > self.priority(child) {
                return Err(Corruption::HeapOrder { index: parent });
            }
        }
        for &child in children.iter().flatten() {
            self.check_subtree(child)?;
        }
        Ok(())
    }
}

impl Default for HeapPriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityQueue for HeapPriorityQueue {
    fn enqueue(&mut self, elem: DataPoint) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.elements[self.count] = elem;
        self.sift_up(self.count);
        self.count += 1;
    }

    /// Removes the root, moves the last element into its place, and sifts it
    /// down.
    fn dequeue(&mut self) -> Result<DataPoint, Error> {
        if self.count == 0 {
            return Err(Error::EmptyQueue);
        }
        self.count -= 1;
        self.elements.swap(0, self.count);
        let result = core::mem::take(&mut self.elements[self.count]);
        self.sift_down(0);
        Ok(result)
    }

    fn peek(&self) -> Result<&DataPoint, Error> {
        if self.count == 0 {
            return Err(Error::EmptyQueue);
        }
        Ok(&self.elements[0])
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
        if let Err(e) = self.check_subtree(0) {
            error!("{}", self.debug_dump("validate_internal_state"));
            return Err(e.into());
        }
        Ok(())
    }

    fn debug_dump(&self, msg: &str) -> String {
        let mut s = String::from(msg);
        for (i, elem) in self.elements[..self.count].iter().enumerate() {
            drop(write!(s, "\n[{}] = {}", i, elem));
        }
        s
    }
}

impl Debug for HeapPriorityQueue {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "PQ: ")?;
        for item in self.elements[..self.count].iter() {
            write!(fmt, "{} ", item)?;
        }
        Ok(())
    }
}
