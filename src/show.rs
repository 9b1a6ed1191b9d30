//! The real-time show driver.
//!
//! Single-threaded and cooperative: one loop interleaves dispatching queued
//! hits with advancing the in-flight fades. A hit's wave effect runs to
//! completion before the next hit can fire, so effects never physically
//! interleave on the wire; fade bookkeeping for earlier hits still advances
//! inside a later hit's wave.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::config::{
    CORNER_DELAY_RANGE, HIT_POINT_BRIGHTNESS_BOOST, IDLE_PAUSE, NORMAL_DELAY_RANGE,
};
use crate::events::HitEvent;
use crate::fade::FadeState;
use crate::grid::vertical_companions;
use crate::panel::{Panel, StripDriver};
use crate::wave::WaveEffect;
use crate::{Error, Result};

/// Arrival pacing profile, chosen by where the wall physically hangs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayProfile {
    /// Wall in the middle of the room: hits every 2-5 s.
    Normal,
    /// Wall in a corner with less traffic: hits every 5-10 s.
    Corner,
}

impl DelayProfile {
    /// Inclusive bounds of the uniform arrival-delay distribution.
    #[must_use]
    pub const fn delay_range(self) -> (Duration, Duration) {
        match self {
            Self::Normal => NORMAL_DELAY_RANGE,
            Self::Corner => CORNER_DELAY_RANGE,
        }
    }
}

/// A hit with its synthetic due time relative to show start.
#[derive(Clone, Copy, Debug)]
struct ScheduledHit {
    due: Duration,
    row: i32,
    col: i32,
    color: smart_leds::RGB8,
}

/// Owns the panel and all animation state for the lifetime of the process.
pub struct ShowDriver<D: StripDriver> {
    panel: Panel<D>,
    fades: FadeState,
}

impl<D: StripDriver> ShowDriver<D> {
    /// Build a driver around the injected strip capability.
    pub fn new(driver: D) -> Self {
        Self {
            panel: Panel::new(driver),
            fades: FadeState::new(),
        }
    }

    /// Play the whole event list, blocking until every effect has decayed,
    /// then leave the wall dark.
    ///
    /// # Errors
    ///
    /// [`Error::NoEvents`] if the list is empty; no pixel is touched.
    pub fn play(&mut self, events: &[HitEvent], profile: DelayProfile) -> Result<()> {
        self.play_with_rng(events, profile, &mut rand::rng())
    }

    /// [`Self::play`] with a caller-supplied randomness source, so tests can
    /// pin the synthetic arrival delays.
    pub fn play_with_rng(
        &mut self,
        events: &[HitEvent],
        profile: DelayProfile,
        rng: &mut impl Rng,
    ) -> Result<()> {
        if events.is_empty() {
            return Err(Error::NoEvents);
        }
        let schedule = schedule(events, profile, rng);
        info!(hits = schedule.len(), ?profile, "starting show");

        self.fades = FadeState::new();
        // Once anything is lit we owe the wall a clear on every exit path,
        // panics included.
        let mut lit = LitPanel(&mut self.panel);
        let start = Instant::now();
        let mut next_index = 0;

        while next_index < schedule.len() || !self.fades.is_empty() {
            let now = Instant::now();
            self.fades.tick(now, lit.0);

            while next_index < schedule.len()
                && now.duration_since(start) >= schedule[next_index].due
            {
                let hit = schedule[next_index];
                let due_ms = u64::try_from(hit.due.as_millis()).unwrap_or(u64::MAX);
                debug!(row = hit.row, col = hit.col, due_ms, "dispatching hit");
                dispatch(lit.0, &mut self.fades, hit);
                next_index += 1;
            }

            thread::sleep(IDLE_PAUSE);
        }

        info!("show finished");
        Ok(()) // dropping `lit` clears the wall
    }

    /// Borrow the underlying strip driver (handy for inspection in tests).
    pub fn driver(&self) -> &D {
        self.panel.driver()
    }
}

/// Assign each event a due time by accumulating uniform random delays from
/// the profile's range. Event timestamps are deliberately not consulted.
fn schedule(
    events: &[HitEvent],
    profile: DelayProfile,
    rng: &mut impl Rng,
) -> Vec<ScheduledHit> {
    let (min_delay, max_delay) = profile.delay_range();
    let mut due = Duration::ZERO;
    events
        .iter()
        .map(|event| {
            due += rng.random_range(min_delay..=max_delay);
            ScheduledHit {
                due,
                row: event.row,
                col: event.col,
                color: event.color,
            }
        })
        .collect()
}

/// Light the hit and its companions, register their fades, then run the
/// wave to completion.
fn dispatch<D: StripDriver>(panel: &mut Panel<D>, fades: &mut FadeState, hit: ScheduledHit) {
    let companions = vertical_companions(hit.row, hit.col);

    panel.set_pixel_deferred(hit.row, hit.col, hit.color, HIT_POINT_BRIGHTNESS_BOOST);
    for &(row, col) in &companions {
        panel.set_pixel_deferred(row, col, hit.color, 1.0);
    }
    panel.commit();

    let now = Instant::now();
    fades.hits.trigger(hit.row, hit.col, hit.color, now);
    for &(row, col) in &companions {
        fades.companions.trigger(row, col, hit.color, now);
    }

    WaveEffect::new(hit.row, hit.col, hit.color).run(panel, fades);
}

/// Scoped "lit wall" marker: clearing is guaranteed when it drops.
struct LitPanel<'a, D: StripDriver>(&'a mut Panel<D>);

impl<D: StripDriver> Drop for LitPanel<'_, D> {
    fn drop(&mut self) {
        self.0.clear_all();
    }
}
