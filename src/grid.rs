//! Logical-grid to physical-strip coordinate mapping.
//!
//! The wall is a 16×15 logical grid built from two separately addressed
//! strips. Even grid rows live on strip A, which snakes up and down one
//! column of the wall at a time. Odd grid rows live on strip B, which snakes
//! left and right across every second column; the odd columns of odd rows
//! are holes with no LED behind them.
//!
//! Within each strip-A column and strip-B row the physical index increases
//! monotonically along the actual cable run, so consecutive columns (and
//! consecutive b-rows) alternate direction.

use crate::config::{
    COLS, LED_COUNT_A, LED_COUNT_B, LEDS_PER_A_COLUMN, LEDS_PER_B_ROW, ROWS,
};

/// The two physical LED strips behind the wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strip {
    /// Strip behind the even grid rows, wired column by column.
    A,
    /// Strip behind the odd grid rows, wired b-row by b-row.
    B,
}

/// Physical location of one LED: which strip, and the index along it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StripAddress {
    /// Strip the LED sits on.
    pub strip: Strip,
    /// Zero-based index along the cable run of that strip.
    pub index: usize,
}

/// Map a logical grid cell to its physical strip address.
///
/// Returns `None` for the odd-row/odd-column holes and for any coordinate
/// outside the grid. Out-of-range input is an input-contract violation on
/// the caller's side, but it is deliberately tolerated here so that a bad
/// event degrades to a dark pixel instead of tearing down the show.
///
/// ```
/// use muon_wall::grid::{strip_address, Strip};
///
/// let origin = strip_address(0, 0).expect("cell (0,0) has an LED");
/// assert_eq!(origin.strip, Strip::A);
/// assert_eq!(origin.index, 0);
///
/// assert!(strip_address(1, 1).is_none()); // hole
/// assert!(strip_address(16, 0).is_none()); // off the wall
/// ```
#[must_use]
pub const fn strip_address(row: i32, col: i32) -> Option<StripAddress> {
    let Some((row, col)) = cell_indices(row, col) else {
        return None;
    };

    if row % 2 == 0 {
        // Strip A: one serpentine column per grid column.
        let base = col * LEDS_PER_A_COLUMN;
        let offset = row / 2;
        let index = if col % 2 == 0 {
            base + offset
        } else {
            base + (LEDS_PER_A_COLUMN - 1 - offset)
        };
        return Some(StripAddress {
            strip: Strip::A,
            index,
        });
    }

    if col % 2 == 1 {
        // Odd column of an odd row: no LED behind this cell.
        return None;
    }

    let b_row = (row - 1) / 2;
    let base = b_row * LEDS_PER_B_ROW;
    let offset = col / 2;
    let index = if b_row % 2 == 0 {
        base + offset
    } else {
        base + (LEDS_PER_B_ROW - 1 - offset)
    };
    Some(StripAddress {
        strip: Strip::B,
        index,
    })
}

/// Bounds-check a signed cell coordinate, returning array indices.
#[must_use]
pub const fn cell_indices(row: i32, col: i32) -> Option<(usize, usize)> {
    if row < 0 || row >= ROWS as i32 || col < 0 || col >= COLS as i32 {
        return None;
    }
    Some((row as usize, col as usize))
}

/// The nearest non-hole cells directly above and below `(row, col)`.
///
/// Scans outward one row at a time and keeps at most one cell in each
/// direction; a hit on the wall's edge gets a single companion, a hit off
/// the wall entirely can still pick up the closest in-bounds neighbors.
///
/// ```
/// use muon_wall::grid::vertical_companions;
///
/// // (2, 1) sits over holes both ways; the scan skips to the even rows.
/// let companions = vertical_companions(2, 1);
/// assert_eq!(companions.as_slice(), &[(0, 1), (4, 1)]);
/// ```
#[must_use]
pub fn vertical_companions(row: i32, col: i32) -> heapless::Vec<(i32, i32), 2> {
    let mut found = heapless::Vec::new();

    let mut above = row - 1;
    while above >= 0 {
        if strip_address(above, col).is_some() {
            let _ = found.push((above, col));
            break;
        }
        above -= 1;
    }

    let mut below = row + 1;
    while below < ROWS as i32 {
        if strip_address(below, col).is_some() {
            let _ = found.push((below, col));
            break;
        }
        below += 1;
    }

    found
}

/// Every non-hole cell claims exactly one in-bounds physical index, and no
/// two cells share one. Checked over the whole grid.
const fn mapping_is_injective() -> bool {
    let mut seen_a = [false; LED_COUNT_A];
    let mut seen_b = [false; LED_COUNT_B];

    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col < COLS {
            match strip_address(row as i32, col as i32) {
                Some(address) => match address.strip {
                    Strip::A => {
                        if address.index >= LED_COUNT_A || seen_a[address.index] {
                            return false;
                        }
                        seen_a[address.index] = true;
                    }
                    Strip::B => {
                        if address.index >= LED_COUNT_B || seen_b[address.index] {
                            return false;
                        }
                        seen_b[address.index] = true;
                    }
                },
                None => {
                    // In-bounds cells may only be unmapped at odd/odd holes.
                    if row % 2 == 0 || col % 2 == 0 {
                        return false;
                    }
                }
            }
            col += 1;
        }
        row += 1;
    }
    true
}

const _: () = assert!(mapping_is_injective(), "serpentine mapping must be injective");
const _: () = assert!(LED_COUNT_A == 120 && LED_COUNT_B == 64, "wall is wired for 120 + 64 LEDs");
