//! Double-strip output buffer with global brightness scaling.
//!
//! [`Panel`] owns one full frame per strip and a [`StripDriver`], the
//! injected capability that knows how to push pixels onto the wire. Pixel
//! writes land in the frames; [`Panel::commit`] pushes both frames to the
//! driver in one batch so multi-pixel updates never tear on the wall.

use smart_leds::RGB8;

use crate::config::{BRIGHTNESS, LED_COUNT_A, LED_COUNT_B};
use crate::grid::{Strip, StripAddress, strip_address};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// Physical output capability for the two LED strips.
///
/// The engine treats both operations as given and infallible: a host whose
/// transport can fail must translate faults into no-ops before they reach
/// this trait.
pub trait StripDriver {
    /// Stage one physical pixel.
    fn set_pixel(&mut self, strip: Strip, index: usize, color: RGB8);
    /// Push the staged pixels of one strip to the wire.
    fn write(&mut self, strip: Strip);
}

/// Apply the global brightness and a per-pixel boost to a color.
///
/// The combined factor is clamped to `[0, 1]`, so every output channel stays
/// within `0..=255` and never exceeds its input channel.
#[must_use]
pub fn scale(color: RGB8, boost: f32) -> RGB8 {
    let factor = (BRIGHTNESS * boost).clamp(0.0, 1.0);
    attenuate(color, factor)
}

/// Multiply each channel by `factor` (expected in `[0, 1]`).
#[must_use]
pub fn attenuate(color: RGB8, factor: f32) -> RGB8 {
    RGB8::new(
        (f32::from(color.r) * factor) as u8,
        (f32::from(color.g) * factor) as u8,
        (f32::from(color.b) * factor) as u8,
    )
}

/// Frame buffers for both strips plus the injected output driver.
pub struct Panel<D: StripDriver> {
    driver: D,
    frame_a: [RGB8; LED_COUNT_A],
    frame_b: [RGB8; LED_COUNT_B],
}

impl<D: StripDriver> Panel<D> {
    /// Wrap a driver with blank (all black) frames.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            frame_a: [colors::BLACK; LED_COUNT_A],
            frame_b: [colors::BLACK; LED_COUNT_B],
        }
    }

    /// Set one logical cell and immediately commit both strips.
    ///
    /// A hole or out-of-range coordinate is a silent no-op: nothing is
    /// staged and nothing is written.
    pub fn set_pixel(&mut self, row: i32, col: i32, color: RGB8, boost: f32) {
        if self.stage(row, col, color, boost) {
            self.commit();
        }
    }

    /// Set one logical cell without committing, for batched updates.
    pub fn set_pixel_deferred(&mut self, row: i32, col: i32, color: RGB8, boost: f32) {
        self.stage(row, col, color, boost);
    }

    fn stage(&mut self, row: i32, col: i32, color: RGB8, boost: f32) -> bool {
        let Some(StripAddress { strip, index }) = strip_address(row, col) else {
            return false; // hole, or off the wall
        };
        let scaled = scale(color, boost);
        match strip {
            Strip::A => self.frame_a[index] = scaled,
            Strip::B => self.frame_b[index] = scaled,
        }
        true
    }

    /// Push both full frames to the driver, then write both strips.
    pub fn commit(&mut self) {
        for (index, color) in self.frame_a.iter().enumerate() {
            self.driver.set_pixel(Strip::A, index, *color);
        }
        self.driver.write(Strip::A);
        for (index, color) in self.frame_b.iter().enumerate() {
            self.driver.set_pixel(Strip::B, index, *color);
        }
        self.driver.write(Strip::B);
    }

    /// Fill every addressable pixel with one brightness-scaled color and commit.
    pub fn fill(&mut self, color: RGB8) {
        let scaled = scale(color, 1.0);
        self.frame_a = [scaled; LED_COUNT_A];
        self.frame_b = [scaled; LED_COUNT_B];
        self.commit();
    }

    /// Black out the whole wall and commit. Idempotent.
    pub fn clear_all(&mut self) {
        self.fill(colors::BLACK);
    }

    /// Staged frame contents for one strip.
    #[must_use]
    pub fn frame(&self, strip: Strip) -> &[RGB8] {
        match strip {
            Strip::A => &self.frame_a,
            Strip::B => &self.frame_b,
        }
    }

    /// Borrow the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutably borrow the underlying driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Unwrap the panel back into its driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
