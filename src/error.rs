//! Crate-wide error and result types.

use derive_more::{Display, Error as DeriveError};

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by the show engine.
///
/// Only the hit-event source can fail; the physical write capability is
/// infallible by contract, and malformed individual events are skipped
/// rather than reported here.
#[derive(Debug, Display, DeriveError)]
pub enum Error {
    /// The hit-event file could not be read.
    #[display("hit event source could not be read: {_0}")]
    EventSource(std::io::Error),

    /// The hit-event file is not a JSON array.
    #[display("hit event source is not a JSON array: {_0}")]
    EventFormat(serde_json::Error),

    /// The event list was empty; there is no show without events.
    #[display("no hit events to play")]
    NoEvents,
}
