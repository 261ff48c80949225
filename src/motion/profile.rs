//! Distance-based acceleration profile.
//!
//! A profile is an ascending table of `(distance, delay)` rows. The distance is
//! measured from the nearer endpoint of the current move, so a move speeds up
//! leaving its origin and slows down approaching its target along the same
//! curve. Short moves never reach the cruise plateau.

use core::f32::consts::PI;

use libm::{cosf, roundf};
use serde::Deserialize;

/// Maximum number of rows in an owned acceleration table.
pub const MAX_TABLE_ROWS: usize = 32;

/// Owned acceleration table, as loaded from configuration or generated.
pub type AccelTable = heapless::Vec<AccelStep, MAX_TABLE_ROWS>;

/// One row of an acceleration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelStep {
    /// Distance from the nearer move endpoint, in steps.
    pub distance: u16,
    /// Step pulse delay in microseconds.
    pub delay_us: u32,
}

impl AccelStep {
    /// Create a new table row.
    #[inline]
    pub const fn new(distance: u16, delay_us: u32) -> Self {
        Self { distance, delay_us }
    }
}

/// Built-in curve for VID6608 / X27.168 gauge motors.
pub static DEFAULT_ACCEL_TABLE: [AccelStep; 23] = [
    AccelStep::new(30, 3000),
    AccelStep::new(65, 2920),
    AccelStep::new(100, 2780),
    AccelStep::new(135, 2600),
    AccelStep::new(170, 2380),
    AccelStep::new(205, 2140),
    AccelStep::new(240, 1890),
    AccelStep::new(275, 1650),
    AccelStep::new(310, 1420),
    AccelStep::new(345, 1210),
    AccelStep::new(380, 1020),
    AccelStep::new(415, 860),
    AccelStep::new(450, 730),
    AccelStep::new(485, 620),
    AccelStep::new(520, 530),
    AccelStep::new(555, 460),
    AccelStep::new(590, 410),
    AccelStep::new(625, 370),
    AccelStep::new(660, 340),
    AccelStep::new(695, 320),
    AccelStep::new(730, 310),
    AccelStep::new(765, 305),
    AccelStep::new(800, 300),
];

/// Lookup view over a borrowed acceleration table.
///
/// The table must be non-empty and strictly ascending in `distance`. This is
/// not checked: a malformed table gives unspecified (but memory-safe) delays.
/// Use [`AccelerationProfile::is_well_formed`] or config validation when the
/// table comes from an untrusted source.
#[derive(Debug, Clone, Copy)]
pub struct AccelerationProfile<'a> {
    table: &'a [AccelStep],
    max_distance: u16,
    cruise_delay_us: u32,
}

impl<'a> AccelerationProfile<'a> {
    /// Wrap a table, caching its last row as the cruise plateau.
    pub fn new(table: &'a [AccelStep]) -> Self {
        let last = table.last().copied().unwrap_or(AccelStep::new(0, 0));
        Self {
            table,
            max_distance: last.distance,
            cruise_delay_us: last.delay_us,
        }
    }

    /// Step delay in microseconds for a distance from the nearer move endpoint.
    pub fn delay_for(&self, distance: u16) -> u32 {
        if distance >= self.max_distance {
            return self.cruise_delay_us;
        }
        self.table
            .iter()
            .find(|row| row.distance > distance)
            .map(|row| row.delay_us)
            .unwrap_or(self.cruise_delay_us)
    }

    /// The underlying table.
    #[inline]
    pub fn table(&self) -> &'a [AccelStep] {
        self.table
    }

    /// Distance at which the cruise plateau starts.
    #[inline]
    pub fn max_distance(&self) -> u16 {
        self.max_distance
    }

    /// Delay used on the cruise plateau.
    #[inline]
    pub fn cruise_delay_us(&self) -> u32 {
        self.cruise_delay_us
    }

    /// Check that the table is non-empty and strictly ascending.
    pub fn is_well_formed(&self) -> bool {
        first_unsorted_row(self.table).is_none() && !self.table.is_empty()
    }
}

impl Default for AccelerationProfile<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_ACCEL_TABLE)
    }
}

/// Index of the first row whose distance does not exceed the previous row's.
pub fn first_unsorted_row(table: &[AccelStep]) -> Option<usize> {
    table
        .windows(2)
        .position(|pair| pair[1].distance <= pair[0].distance)
        .map(|i| i + 1)
}

/// Generate a half-cosine ramp from `start_delay_us` down to `cruise_delay_us`.
///
/// Rows are spread evenly over `ramp_distance` steps. The row count is capped
/// at both [`MAX_TABLE_ROWS`] and `ramp_distance` so distances stay strictly
/// increasing. The last row is always `(ramp_distance, cruise_delay_us)`.
/// Returns an empty table when `ramp_distance` or `rows` is zero.
pub fn cosine_ramp(
    ramp_distance: u16,
    start_delay_us: u32,
    cruise_delay_us: u32,
    rows: usize,
) -> AccelTable {
    let mut table = AccelTable::new();
    let rows = rows.min(MAX_TABLE_ROWS).min(ramp_distance as usize);
    if rows == 0 {
        return table;
    }

    let span = start_delay_us as f32 - cruise_delay_us as f32;
    for i in 1..=rows {
        let distance = (ramp_distance as usize * i / rows) as u16;
        let t = if rows == 1 {
            1.0
        } else {
            (i - 1) as f32 / (rows - 1) as f32
        };
        let eased = (1.0 + cosf(PI * t)) / 2.0;
        let delay_us = if i == rows {
            cruise_delay_us
        } else {
            roundf(cruise_delay_us as f32 + span * eased) as u32
        };
        // Capacity is bounded by `rows` above.
        let _ = table.push(AccelStep::new(distance, delay_us));
    }
    table
}
