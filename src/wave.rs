//! The traveling-wave effect fired on every hit.
//!
//! Two phases run on the hit's row, to completion, before the next hit can
//! be dispatched:
//!
//! 1. **Expansion** — a double-direction ripple spreading outward from the
//!    hit column, read as causally linked to the hit.
//! 2. **Reflection** — a single right-to-left sweep over the whole row
//!    (skipping the hit column), a consistent closing flourish regardless of
//!    where the hit landed.
//!
//! Each lit wave segment self-clears after
//! [`WAVE_LIGHT_DURATION`](crate::config::WAVE_LIGHT_DURATION); between
//! steps the in-flight fades keep decaying, so earlier hits never freeze
//! while a wave runs.

use std::thread;
use std::time::Instant;

use smart_leds::RGB8;

use crate::config::{COLS, WAVE_LIGHT_DURATION, WAVE_LIGHT_SPREAD_DELAY};
use crate::fade::FadeState;
use crate::panel::{Panel, StripDriver, colors};

/// Transient lit cell on the wave row, scheduled for automatic clearing.
#[derive(Clone, Copy, Debug)]
struct WaveSegment {
    col: i32,
    off_at: Instant,
}

/// Live segments never pile up: with an 80 ms spread delay and a 120 ms
/// segment lifetime only a handful exist at once.
const SEGMENT_CAPACITY: usize = 32;

/// Number of expansion steps needed to carry the ripple off both edges.
#[must_use]
pub fn expansion_step_count(origin: i32) -> i32 {
    origin.max(COLS as i32 - 1 - origin)
}

/// The in-bounds (left, right) columns lit at one expansion step.
#[must_use]
pub fn expansion_columns(origin: i32, step: i32) -> (Option<i32>, Option<i32>) {
    let left = origin - step;
    let right = origin + step;
    (
        (left >= 0).then_some(left),
        (right <= COLS as i32 - 1).then_some(right),
    )
}

/// Columns lit by the reflection sweep: right to left, every column except
/// the original hit column.
pub fn reflection_columns(origin: i32) -> impl Iterator<Item = i32> {
    (0..COLS as i32).rev().filter(move |&col| col != origin)
}

/// One wave run for one hit.
pub struct WaveEffect {
    row: i32,
    origin: i32,
    color: RGB8,
    segments: heapless::Vec<WaveSegment, SEGMENT_CAPACITY>,
}

impl WaveEffect {
    /// Prepare a wave on `row`, centered on the hit column.
    #[must_use]
    pub fn new(row: i32, origin: i32, color: RGB8) -> Self {
        Self {
            row,
            origin,
            color,
            segments: heapless::Vec::new(),
        }
    }

    /// Run expansion, reflection, and the final row clear, blocking until
    /// the whole effect has played out.
    pub fn run<D: StripDriver>(mut self, panel: &mut Panel<D>, fades: &mut FadeState) {
        self.expansion(panel, fades);
        self.reflection(panel, fades);
        self.finalize(panel);
    }

    fn expansion<D: StripDriver>(&mut self, panel: &mut Panel<D>, fades: &mut FadeState) {
        for step in 1..=expansion_step_count(self.origin) {
            fades.tick(Instant::now(), panel);
            let now = Instant::now();

            let (left, right) = expansion_columns(self.origin, step);
            for col in [left, right].into_iter().flatten() {
                self.light(panel, col, now);
            }

            self.expire(now, panel);
            panel.commit();
            thread::sleep(WAVE_LIGHT_SPREAD_DELAY);
        }
    }

    fn reflection<D: StripDriver>(&mut self, panel: &mut Panel<D>, fades: &mut FadeState) {
        // One full-duration pass per column, hit column included; only the
        // lighting skips the hit column.
        for col in (0..COLS as i32).rev() {
            fades.tick(Instant::now(), panel);
            let now = Instant::now();

            if col != self.origin {
                self.light(panel, col, now);
            }
            self.expire(now, panel);
            panel.commit();
            thread::sleep(WAVE_LIGHT_SPREAD_DELAY);
        }
    }

    /// Force the row black except the hit column, whose own fade entry still
    /// governs it.
    fn finalize<D: StripDriver>(&mut self, panel: &mut Panel<D>) {
        for col in 0..COLS as i32 {
            if col != self.origin {
                panel.set_pixel_deferred(self.row, col, colors::BLACK, 1.0);
            }
        }
        panel.commit();
    }

    fn light<D: StripDriver>(&mut self, panel: &mut Panel<D>, col: i32, now: Instant) {
        panel.set_pixel_deferred(self.row, col, self.color, 1.0);
        let _ = self.segments.push(WaveSegment {
            col,
            off_at: now + WAVE_LIGHT_DURATION,
        });
    }

    fn expire<D: StripDriver>(&mut self, now: Instant, panel: &mut Panel<D>) {
        let row = self.row;
        self.segments.retain(|segment| {
            if now >= segment.off_at {
                panel.set_pixel_deferred(row, segment.col, colors::BLACK, 1.0);
                false
            } else {
                true
            }
        });
    }
}
