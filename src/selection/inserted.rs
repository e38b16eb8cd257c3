//! Schedule for the secondary ("inserted") image list
//!
//! Starting at a configured instance number, an inserted image is due on
//! instances chosen by a repeating frequency list: a frequency of 3 means
//! two instances without, then one with. When due, the image either goes
//! to a fixed 1-based position of the instance's image order (positions
//! cycle across instances) or is mixed in with the pool images.

/// Where the inserted image goes for one instance
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertSlot {
    /// Mixed in with the pool images (subject to image shuffling)
    Mixed,
    /// Inserted at this 1-based position after any shuffling
    At(usize),
}

/// Cross-instance state for the secondary list
#[derive(Debug, Clone)]
pub struct InsertedSchedule<T> {
    images: Vec<T>,
    start: usize,
    frequency: Vec<usize>,
    positions: Vec<usize>,
    countdown: usize,
    frequency_cursor: usize,
    position_cursor: usize,
    image_cursor: usize,
}

impl<T: Clone> InsertedSchedule<T> {
    /// Create a schedule
    ///
    /// `start` is the first 1-based instance that may receive an inserted
    /// image; an empty `frequency` behaves as `[1]` (every instance).
    pub fn new(images: Vec<T>, start: usize, frequency: Vec<usize>, positions: Vec<usize>) -> Self {
        let frequency = if frequency.is_empty() {
            vec![1]
        } else {
            frequency
        };
        Self {
            images,
            start,
            frequency,
            positions,
            countdown: 1,
            frequency_cursor: 0,
            position_cursor: 0,
            image_cursor: 0,
        }
    }

    /// Decide whether `instance` (1-based) gets an inserted image
    ///
    /// Must be called exactly once per instance, in order; the frequency
    /// countdown only runs from the start instance on.
    pub fn slot_for(&mut self, instance: usize) -> Option<InsertSlot> {
        if self.images.is_empty() || instance < self.start {
            return None;
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return None;
        }
        self.countdown = next_cyclic(&self.frequency, &mut self.frequency_cursor)
            .copied()
            .unwrap_or(1)
            .max(1);

        match next_cyclic(&self.positions, &mut self.position_cursor) {
            Some(&position) if position > 0 => Some(InsertSlot::At(position)),
            _ => Some(InsertSlot::Mixed),
        }
    }

    /// Next image from the secondary list, cycling
    pub fn next_image(&mut self) -> Option<T> {
        next_cyclic(&self.images, &mut self.image_cursor).cloned()
    }
}

fn next_cyclic<'a, T>(items: &'a [T], cursor: &mut usize) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    if *cursor >= items.len() {
        *cursor = 0;
    }
    let item = items.get(*cursor);
    *cursor += 1;
    item
}
