//! In-memory strip driver for testing on the host, no hardware required.

use smart_leds::RGB8;

use crate::config::{LED_COUNT_A, LED_COUNT_B};
use crate::grid::{Strip, StripAddress};
use crate::panel::colors;

/// A [`StripDriver`](crate::panel::StripDriver) that records everything it
/// is handed: current buffers, per-strip write counts, and which physical
/// addresses were ever lit (non-black at any point).
pub struct HostStrips {
    frame_a: [RGB8; LED_COUNT_A],
    frame_b: [RGB8; LED_COUNT_B],
    ever_lit_a: [bool; LED_COUNT_A],
    ever_lit_b: [bool; LED_COUNT_B],
    writes_a: usize,
    writes_b: usize,
}

impl HostStrips {
    /// Fresh driver, all black, nothing written yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_a: [colors::BLACK; LED_COUNT_A],
            frame_b: [colors::BLACK; LED_COUNT_B],
            ever_lit_a: [false; LED_COUNT_A],
            ever_lit_b: [false; LED_COUNT_B],
            writes_a: 0,
            writes_b: 0,
        }
    }

    /// Current color of one physical LED.
    #[must_use]
    pub fn pixel(&self, address: StripAddress) -> RGB8 {
        match address.strip {
            Strip::A => self.frame_a[address.index],
            Strip::B => self.frame_b[address.index],
        }
    }

    /// Whether this LED was ever handed a non-black color.
    #[must_use]
    pub fn ever_lit(&self, address: StripAddress) -> bool {
        match address.strip {
            Strip::A => self.ever_lit_a[address.index],
            Strip::B => self.ever_lit_b[address.index],
        }
    }

    /// Whether every LED on both strips is currently black.
    #[must_use]
    pub fn is_all_black(&self) -> bool {
        let black = |c: &RGB8| c.r == 0 && c.g == 0 && c.b == 0;
        self.frame_a.iter().all(black) && self.frame_b.iter().all(black)
    }

    /// Number of `write` calls seen for a strip.
    #[must_use]
    pub fn write_count(&self, strip: Strip) -> usize {
        match strip {
            Strip::A => self.writes_a,
            Strip::B => self.writes_b,
        }
    }

    /// Current buffer contents of one strip.
    #[must_use]
    pub fn frame(&self, strip: Strip) -> &[RGB8] {
        match strip {
            Strip::A => &self.frame_a,
            Strip::B => &self.frame_b,
        }
    }
}

impl Default for HostStrips {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::panel::StripDriver for HostStrips {
    fn set_pixel(&mut self, strip: Strip, index: usize, color: RGB8) {
        let lit = color.r > 0 || color.g > 0 || color.b > 0;
        match strip {
            Strip::A => {
                self.frame_a[index] = color;
                self.ever_lit_a[index] |= lit;
            }
            Strip::B => {
                self.frame_b[index] = color;
                self.ever_lit_b[index] |= lit;
            }
        }
    }

    fn write(&mut self, strip: Strip) {
        match strip {
            Strip::A => self.writes_a += 1,
            Strip::B => self.writes_b += 1,
        }
    }
}
