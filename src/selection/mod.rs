//! Image selection: which images go into each montage instance
//!
//! This module contains:
//! - The seeded random source shared by all choices
//! - The cyclic primary pool
//! - The secondary list schedule
//! - Column, row, and background choosers

/// Column, row, and background choice per instance
pub mod choice;
/// Secondary image list cadence and positions
pub mod inserted;
/// Cyclic primary image pool
pub mod pool;
/// Seeded random selector
pub mod random;

pub use pool::ImagePool;
pub use random::RandomSelector;

use inserted::{InsertSlot, InsertedSchedule};

/// Options that shape one instance's image selection
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    /// Shuffle the selected images (and the pool on every wrap)
    pub shuffle_images: bool,
    /// Stop filling once the pool wraps
    pub no_wrap: bool,
}

/// Pick the ordered images that fill one instance's normal cells
///
/// `cells` is the number of non-feature cells. When an inserted image is
/// due it takes one of those cells. A fixed insert position beyond `cells`
/// falls back to mixing the image in.
pub fn select_images<T: Clone>(
    instance: usize,
    cells: usize,
    pool: &mut ImagePool<T>,
    inserted: &mut InsertedSchedule<T>,
    flags: SelectionFlags,
    random: &mut RandomSelector,
) -> Vec<T> {
    let slot = match inserted.slot_for(instance) {
        Some(InsertSlot::At(position)) if position > cells => Some(InsertSlot::Mixed),
        other => other,
    };

    let from_pool = if slot.is_some() {
        cells.saturating_sub(1)
    } else {
        cells
    };

    let mut images = pool.take(from_pool, flags.no_wrap, random);

    if slot == Some(InsertSlot::Mixed) {
        if let Some(image) = inserted.next_image() {
            images.push(image);
        }
    }

    if flags.shuffle_images {
        random.shuffle(&mut images);
    }

    if let Some(InsertSlot::At(position)) = slot {
        if let Some(image) = inserted.next_image() {
            let index = position.saturating_sub(1).min(images.len());
            images.insert(index, image);
        }
    }

    images
}
