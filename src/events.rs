//! Hit-event records and the `hits.json` loader.
//!
//! The event file is produced by the offline preprocessing step as a JSON
//! array of `[timestamp, row, col, [r, g, b]]` entries, already ordered by
//! timestamp. The timestamp is carried through but deliberately ignored for
//! scheduling: the show paces hits with synthetic random delays instead
//! (visual pacing over physical fidelity).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use smart_leds::RGB8;
use tracing::debug;

use crate::{Error, Result};

/// One detector hit: when it happened and where it lands on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitEvent {
    /// Seconds since the start of the capture. Unused by the scheduler.
    pub timestamp: f64,
    /// Grid row; may be out of range, in which case only the valid parts of
    /// the hit effect render.
    pub row: i32,
    /// Grid column; same contract as `row`.
    pub col: i32,
    /// Base color chosen by the ETL from the scattering angle.
    pub color: RGB8,
}

/// Raw file entry. The color is `null` for hits the ETL could not classify.
#[derive(Deserialize)]
struct RawHit(f64, i32, i32, Option<[u8; 3]>);

/// Load hit events from a JSON file.
///
/// # Errors
///
/// A missing or unreadable file, or a file that is not a JSON array, is
/// fatal: there is no show without events. Individual malformed entries
/// (wrong arity, non-numeric fields, out-of-range channels, `null` color)
/// are skipped, not fatal.
pub fn load_hits(path: impl AsRef<Path>) -> Result<Vec<HitEvent>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(Error::EventSource)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&text).map_err(Error::EventFormat)?;

    let mut hits = Vec::with_capacity(raw.len());
    let mut skipped = 0_usize;
    for value in raw {
        match parse_entry(value) {
            Some(hit) => hits.push(hit),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "ignored malformed hit entries");
    }
    debug!(count = hits.len(), path = %path.display(), "loaded hit events");
    Ok(hits)
}

fn parse_entry(value: serde_json::Value) -> Option<HitEvent> {
    let RawHit(timestamp, row, col, color) = serde_json::from_value(value).ok()?;
    let [r, g, b] = color?;
    Some(HitEvent {
        timestamp,
        row,
        col,
        color: RGB8::new(r, g, b),
    })
}
