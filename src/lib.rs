//! Replay detector hit events as a live light show on a two-strip LED wall.
//!
//! The wall is a 16×15 logical grid assembled from two physically different
//! addressable strips wired serpentine with irregular holes. An offline
//! preprocessing step turns raw detector records into an ordered list of
//! `(timestamp, row, col, color)` hits; this crate consumes that list and
//! drives the live animation: for each hit, the cell flashes bright with
//! its two vertical companions, a double-direction wave ripples across the
//! row and reflects back, and everything fades to black.
//!
//! # Glossary
//!
//! - **Hole**: a logical grid cell with no LED behind it (odd row, odd column).
//! - **Companion cell**: the nearest non-hole cell directly above and below
//!   a hit, lit alongside it.
//! - **Wave segment**: a transient lit cell on the hit's row with its own
//!   expiry time.
//!
//! # Example
//!
//! ```no_run
//! use muon_wall::{events, host::HostStrips, show::{DelayProfile, ShowDriver}};
//!
//! # fn main() -> muon_wall::Result<()> {
//! let hits = events::load_hits("hits.json")?;
//! let mut driver = ShowDriver::new(HostStrips::new());
//! driver.play(&hits, DelayProfile::Normal)?;
//! # Ok(())
//! # }
//! ```
//!
//! The physical wire protocol is not part of this crate: anything
//! implementing [`panel::StripDriver`] can sit behind the show, from real
//! NeoPixel transports to the in-memory [`host::HostStrips`] test double.

pub mod config;
mod error;
pub mod events;
pub mod fade;
pub mod grid;
pub mod host;
pub mod panel;
pub mod show;
pub mod wave;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
