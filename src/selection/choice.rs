//! Per-instance choices: column count, row count, background image

use crate::selection::random::RandomSelector;

/// Chooses a grid dimension from its candidate list each instance
///
/// In order mode the candidates are used cyclically. In shuffle mode a
/// candidate is picked uniformly, except that a single candidate `n` means
/// "anything from 1 to n".
#[derive(Debug, Clone)]
pub struct AxisChoice {
    candidates: Vec<u32>,
    shuffle: bool,
    cursor: usize,
}

impl AxisChoice {
    /// Create a chooser; an empty candidate list behaves as `[1]`
    pub fn new(candidates: &[u32], shuffle: bool) -> Self {
        let candidates = if candidates.is_empty() {
            vec![1]
        } else {
            candidates.to_vec()
        };
        Self {
            candidates,
            shuffle,
            cursor: 0,
        }
    }

    /// Value for the next instance, never zero
    pub fn next(&mut self, random: &mut RandomSelector) -> u32 {
        let value = if self.shuffle {
            match self.candidates.as_slice() {
                [single] => random.one_to(*single),
                all => all.get(random.index(all.len())).copied().unwrap_or(1),
            }
        } else {
            if self.cursor >= self.candidates.len() {
                self.cursor = 0;
            }
            let value = self.candidates.get(self.cursor).copied().unwrap_or(1);
            self.cursor += 1;
            value
        };
        value.max(1)
    }
}

/// Chooses one background image per instance
#[derive(Debug, Clone)]
pub struct BackgroundChoice<T> {
    images: Vec<T>,
    shuffle: bool,
    cursor: usize,
}

impl<T: Clone> BackgroundChoice<T> {
    /// Create a chooser over the background candidates
    pub const fn new(images: Vec<T>, shuffle: bool) -> Self {
        Self {
            images,
            shuffle,
            cursor: 0,
        }
    }

    /// Background for the next instance, `None` without candidates
    pub fn next(&mut self, random: &mut RandomSelector) -> Option<T> {
        if self.images.is_empty() {
            return None;
        }
        let index = if self.shuffle {
            random.index(self.images.len())
        } else {
            if self.cursor >= self.images.len() {
                self.cursor = 0;
            }
            let index = self.cursor;
            self.cursor += 1;
            index
        };
        self.images.get(index).cloned()
    }
}
