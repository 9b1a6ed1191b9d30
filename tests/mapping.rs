#![allow(missing_docs)]
//! Host-level tests for the coordinate mapper.

use std::collections::HashSet;

use muon_wall::config::{COLS, LED_COUNT_A, LED_COUNT_B, LEDS_PER_A_COLUMN, LEDS_PER_B_ROW, ROWS};
use muon_wall::grid::{Strip, StripAddress, strip_address, vertical_companions};

fn address(row: i32, col: i32) -> StripAddress {
    strip_address(row, col).unwrap_or_else(|| panic!("cell ({row},{col}) should have an LED"))
}

#[test]
fn known_cells_match_expected_addresses() {
    let cases = [
        ((0, 0), Strip::A, 0),
        ((2, 0), Strip::A, 1),
        ((14, 0), Strip::A, 7),
        ((0, 1), Strip::A, 15), // odd column runs bottom-up
        ((14, 1), Strip::A, 8),
        ((0, 2), Strip::A, 16),
        ((1, 0), Strip::B, 0),
        ((1, 2), Strip::B, 1),
        ((1, 14), Strip::B, 7),
        ((3, 14), Strip::B, 8), // odd b-row runs right-to-left
        ((3, 0), Strip::B, 15),
        ((15, 14), Strip::B, 56),
        ((15, 0), Strip::B, 63),
    ];
    for ((row, col), strip, index) in cases {
        assert_eq!(
            address(row, col),
            StripAddress { strip, index },
            "cell ({row},{col})"
        );
    }
}

#[test]
fn mapping_is_injective_over_non_hole_cells() {
    let mut seen = HashSet::new();
    let mut mapped = 0;
    for row in 0..ROWS as i32 {
        for col in 0..COLS as i32 {
            if let Some(addr) = strip_address(row, col) {
                assert!(
                    seen.insert((addr.strip, addr.index)),
                    "cells share address {addr:?}"
                );
                mapped += 1;
            }
        }
    }
    // Every physical LED is claimed by exactly one cell.
    assert_eq!(mapped, LED_COUNT_A + LED_COUNT_B);
}

#[test]
fn odd_row_odd_column_cells_are_holes() {
    for row in (1..ROWS as i32).step_by(2) {
        for col in (1..COLS as i32).step_by(2) {
            assert!(strip_address(row, col).is_none(), "({row},{col})");
        }
    }
}

#[test]
fn out_of_bounds_coordinates_have_no_led() {
    for (row, col) in [(-1, 0), (0, -1), (ROWS as i32, 0), (0, COLS as i32), (100, 100), (-5, -5)] {
        assert!(strip_address(row, col).is_none(), "({row},{col})");
    }
}

#[test]
fn strip_a_indices_follow_the_cable_run() {
    // The cable snakes down one grid column at a time; even columns run
    // top-down, odd columns bottom-up. Indices must be consecutive.
    let mut expected_index = 0;
    for col in 0..COLS as i32 {
        let rows: Vec<i32> = if col % 2 == 0 {
            (0..ROWS as i32).step_by(2).collect()
        } else {
            (0..ROWS as i32).step_by(2).rev().collect()
        };
        assert_eq!(rows.len(), LEDS_PER_A_COLUMN);
        for row in rows {
            let addr = address(row, col);
            assert_eq!(addr.strip, Strip::A);
            assert_eq!(addr.index, expected_index, "cell ({row},{col})");
            expected_index += 1;
        }
    }
    assert_eq!(expected_index, LED_COUNT_A);
}

#[test]
fn strip_b_indices_follow_the_cable_run() {
    let mut expected_index = 0;
    for b_row in 0..(ROWS / 2) as i32 {
        let row = 2 * b_row + 1;
        let cols: Vec<i32> = if b_row % 2 == 0 {
            (0..COLS as i32).step_by(2).collect()
        } else {
            (0..COLS as i32).step_by(2).rev().collect()
        };
        assert_eq!(cols.len(), LEDS_PER_B_ROW);
        for col in cols {
            let addr = address(row, col);
            assert_eq!(addr.strip, Strip::B);
            assert_eq!(addr.index, expected_index, "cell ({row},{col})");
            expected_index += 1;
        }
    }
    assert_eq!(expected_index, LED_COUNT_B);
}

#[test]
fn companions_are_the_nearest_non_hole_neighbors() {
    // Even column: the rows directly above/below always have LEDs.
    assert_eq!(vertical_companions(8, 4).as_slice(), &[(7, 4), (9, 4)]);
    // Odd column: odd rows are holes, so the scan skips to the even rows.
    assert_eq!(vertical_companions(2, 1).as_slice(), &[(0, 1), (4, 1)]);
    // Top edge: only the downward companion exists.
    assert_eq!(vertical_companions(0, 0).as_slice(), &[(1, 0)]);
    // Bottom edge on an odd column.
    assert_eq!(vertical_companions(15, 1).as_slice(), &[(14, 1)]);
}

#[test]
fn companions_of_an_out_of_bounds_hit_stay_in_bounds() {
    assert_eq!(vertical_companions(16, 0).as_slice(), &[(15, 0)]);
    assert_eq!(vertical_companions(-1, 0).as_slice(), &[(0, 0)]);
}
