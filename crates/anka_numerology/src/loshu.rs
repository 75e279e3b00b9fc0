//! Lo Shu grid: frequency of the digits 1 to 9 in a birth date.

use anka_time::{NaiveDate, ddmmyyyy_digits};

/// Display layout of the 3×3 magic square, row by row.
pub const LO_SHU_LAYOUT: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// Digit counts; zeros in the date are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoShuGrid {
    counts: [u32; 9],
}

impl LoShuGrid {
    /// Count the digits of an arbitrary digit slice.
    pub fn from_digits(digits: &[u8]) -> Self {
        let mut counts = [0; 9];
        for &d in digits {
            if (1..=9).contains(&d) {
                counts[usize::from(d - 1)] += 1;
            }
        }
        Self { counts }
    }

    /// Grid of the `DDMMYYYY` digits of `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_digits(&ddmmyyyy_digits(date))
    }

    /// Occurrences of `digit`; 0 outside 1..=9.
    pub fn count(&self, digit: u32) -> u32 {
        match digit {
            1..=9 => self.counts[(digit - 1) as usize],
            _ => 0,
        }
    }

    pub fn has(&self, digit: u32) -> bool {
        self.count(digit) > 0
    }

    /// Counts for digits 1..=9 in order.
    pub fn counts(&self) -> [u32; 9] {
        self.counts
    }

    /// Digits 1..=9 that never occur.
    pub fn missing(&self) -> Vec<u32> {
        (1..=9).filter(|&d| !self.has(d)).collect()
    }

    /// Copy with the driver and conductor cells counted once more.
    ///
    /// Master numbers have no cell and are skipped.
    pub fn with_driver_conductor(&self, driver: u32, conductor: u32) -> Self {
        let mut grid = *self;
        for n in [driver, conductor] {
            if (1..=9).contains(&n) {
                grid.counts[(n - 1) as usize] += 1;
            }
        }
        grid
    }

    /// Counts arranged in [`LO_SHU_LAYOUT`] order.
    pub fn layout(&self) -> [[(u8, u32); 3]; 3] {
        LO_SHU_LAYOUT.map(|row| row.map(|d| (d, self.count(u32::from(d)))))
    }
}
