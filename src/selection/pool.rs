//! Cyclic image pool shared by every instance of an invocation
//!
//! The cursor is never reset between instances, so a multi-instance run
//! uses every pool entry before repeating any.

use crate::selection::random::RandomSelector;

/// Result of asking the pool for its next entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Draw<T> {
    /// Next entry, and whether the cursor wrapped to reach it
    Item {
        /// The drawn entry
        item: T,
        /// The cursor passed the end of the list before this draw
        wrapped: bool,
    },
    /// The pool is empty
    Empty,
}

/// Ordered or shuffled pool with a persistent cursor
#[derive(Debug, Clone)]
pub struct ImagePool<T> {
    items: Vec<T>,
    next: usize,
    shuffle: bool,
    wrap_count: usize,
}

impl<T: Clone> ImagePool<T> {
    /// Create a pool; when `shuffle` is set the order is randomized now
    pub fn new(items: Vec<T>, shuffle: bool, random: &mut RandomSelector) -> Self {
        let mut pool = Self {
            items,
            next: 0,
            shuffle,
            wrap_count: 0,
        };
        if shuffle {
            random.shuffle(&mut pool.items);
        }
        pool
    }

    /// Number of entries in the pool
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the pool holds no entries
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many times the cursor has wrapped back to the start
    pub const fn wrap_count(&self) -> usize {
        self.wrap_count
    }

    /// Take the next entry, wrapping (and reshuffling) past the end
    pub fn draw(&mut self, random: &mut RandomSelector) -> Draw<T> {
        let wrapped = self.wrap_if_exhausted(random);
        match self.items.get(self.next) {
            Some(item) => {
                self.next += 1;
                Draw::Item {
                    item: item.clone(),
                    wrapped,
                }
            }
            None => Draw::Empty,
        }
    }

    /// Take up to `count` entries in cursor order
    ///
    /// With `no_wrap` the fill stops as soon as the pool runs out; the
    /// cursor is left at the start so the next call begins a new cycle. A
    /// call that finds the pool already used up therefore takes nothing.
    pub fn take(&mut self, count: usize, no_wrap: bool, random: &mut RandomSelector) -> Vec<T> {
        let mut taken = Vec::with_capacity(count);
        while taken.len() < count {
            if no_wrap && self.next >= self.items.len() {
                self.wrap_if_exhausted(random);
                break;
            }
            match self.draw(random) {
                Draw::Item { item, .. } => taken.push(item),
                Draw::Empty => break,
            }
        }
        taken
    }

    fn wrap_if_exhausted(&mut self, random: &mut RandomSelector) -> bool {
        if self.next < self.items.len() || self.items.is_empty() {
            return false;
        }
        self.next = 0;
        self.wrap_count += 1;
        if self.shuffle {
            random.shuffle(&mut self.items);
        }
        true
    }
}
