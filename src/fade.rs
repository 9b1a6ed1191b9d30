//! Per-cell fade bookkeeping.
//!
//! Each triggered cell holds at full intensity for a short delay, then
//! decays linearly to black over [`FADE_DURATION`](crate::config::FADE_DURATION).
//! Two independent registries exist per show: one for hit cells (rendered
//! with the brightness boost, so they sit near full intensity for most of
//! the decay) and one for the vertical companion cells (plain linear fade).
//!
//! The registries are dense optional-entry arrays over the fixed grid; there
//! is no process-wide state, the show driver owns a [`FadeState`] and passes
//! it wherever ticking is needed.

use std::time::{Duration, Instant};

use smart_leds::RGB8;

use crate::config::{
    COLS, COMPANION_HOLD_DELAY, FADE_DURATION, HIT_HOLD_DELAY, HIT_POINT_BRIGHTNESS_BOOST, ROWS,
};
use crate::grid::cell_indices;
use crate::panel::{Panel, StripDriver, attenuate, colors};

/// One in-flight fade: the base color and the instant decay begins.
#[derive(Clone, Copy, Debug)]
struct FadeEntry {
    color: RGB8,
    fade_start: Instant,
}

/// Fade entries for every grid cell, with one render law.
pub struct FadeRegistry {
    cells: [[Option<FadeEntry>; COLS]; ROWS],
    hold: Duration,
    render_boost: f32,
}

impl FadeRegistry {
    /// Registry for hit cells: boosted render, longer hold.
    #[must_use]
    pub fn for_hits() -> Self {
        Self::new(HIT_HOLD_DELAY, HIT_POINT_BRIGHTNESS_BOOST)
    }

    /// Registry for companion cells: plain render, shorter hold.
    #[must_use]
    pub fn for_companions() -> Self {
        Self::new(COMPANION_HOLD_DELAY, 1.0)
    }

    fn new(hold: Duration, render_boost: f32) -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
            hold,
            render_boost,
        }
    }

    /// Insert or overwrite the fade entry for a cell.
    ///
    /// Decay begins `hold` after `now`. Re-triggering a cell mid-fade simply
    /// replaces its entry: last write wins, no blending. Out-of-range cells
    /// are ignored.
    pub fn trigger(&mut self, row: i32, col: i32, color: RGB8, now: Instant) {
        let Some((row, col)) = cell_indices(row, col) else {
            return;
        };
        self.cells[row][col] = Some(FadeEntry {
            color,
            fade_start: now + self.hold,
        });
    }

    /// Advance every entry to `now`, staging faded pixels on the panel.
    ///
    /// Entries still inside their hold delay render unchanged (the dispatch
    /// already painted them at full intensity). Entries past the full fade
    /// are painted black and removed. Returns whether anything was staged;
    /// the caller decides when to commit.
    pub fn tick<D: StripDriver>(&mut self, now: Instant, panel: &mut Panel<D>) -> bool {
        let mut staged = false;
        for (row, row_cells) in self.cells.iter_mut().enumerate() {
            for (col, slot) in row_cells.iter_mut().enumerate() {
                let Some(entry) = *slot else { continue };
                let Some(elapsed) = now.checked_duration_since(entry.fade_start) else {
                    continue; // still holding at full intensity
                };
                let progress = (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0);
                if progress >= 1.0 {
                    panel.set_pixel_deferred(row as i32, col as i32, colors::BLACK, 1.0);
                    *slot = None;
                } else {
                    let factor = ((1.0 - progress) * self.render_boost).min(1.0);
                    let faded = attenuate(entry.color, factor);
                    panel.set_pixel_deferred(row as i32, col as i32, faded, 1.0);
                }
                staged = true;
            }
        }
        staged
    }

    /// Whether no fades remain in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }
}

/// Both fade registries of one running show.
pub struct FadeState {
    /// Fades for the hit cells themselves.
    pub hits: FadeRegistry,
    /// Fades for the vertical companion cells.
    pub companions: FadeRegistry,
}

impl FadeState {
    /// Fresh, empty state for a new show.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hits: FadeRegistry::for_hits(),
            companions: FadeRegistry::for_companions(),
        }
    }

    /// Tick both registries and commit once if anything changed.
    pub fn tick<D: StripDriver>(&mut self, now: Instant, panel: &mut Panel<D>) {
        let staged_hits = self.hits.tick(now, panel);
        let staged_companions = self.companions.tick(now, panel);
        if staged_hits || staged_companions {
            panel.commit();
        }
    }

    /// Whether both registries are drained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.companions.is_empty()
    }
}

impl Default for FadeState {
    fn default() -> Self {
        Self::new()
    }
}
