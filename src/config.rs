//! Fixed show configuration.
//!
//! Everything here is a compile-time constant: the wall geometry is wired
//! into the hardware and the animation timings were tuned by eye against the
//! physical panel, so none of it is runtime-negotiated.

use std::time::Duration;

/// Logical grid rows.
pub const ROWS: usize = 16;
/// Logical grid columns.
pub const COLS: usize = 15;

/// Strip A carries the even grid rows, one serpentine column at a time.
pub const LEDS_PER_A_COLUMN: usize = (ROWS + 1) / 2;
/// Number of physical rows on strip B (the odd grid rows).
pub const B_ROW_COUNT: usize = ROWS / 2;
/// LEDs per strip-B row; odd columns on odd rows are holes with no LED.
pub const LEDS_PER_B_ROW: usize = (COLS + 1) / 2;

/// Total LEDs on strip A.
pub const LED_COUNT_A: usize = COLS * LEDS_PER_A_COLUMN;
/// Total LEDs on strip B.
pub const LED_COUNT_B: usize = B_ROW_COUNT * LEDS_PER_B_ROW;

/// Global brightness scale applied to every pixel before output.
pub const BRIGHTNESS: f32 = 0.05;
/// Extra brightness multiplier for the hit cell itself.
pub const HIT_POINT_BRIGHTNESS_BOOST: f32 = 10.0;

/// Full-intensity hold before the hit cell starts fading.
pub const HIT_HOLD_DELAY: Duration = Duration::from_millis(100);
/// Full-intensity hold before a companion cell starts fading.
pub const COMPANION_HOLD_DELAY: Duration = Duration::from_millis(50);

/// Number of fade steps; together with [`FADE_INTERVAL`] this fixes the
/// total decay time.
pub const FADE_STEPS: u32 = 10;
/// Nominal time per fade step.
pub const FADE_INTERVAL: Duration = Duration::from_millis(40);
/// Total linear fade-to-black time (`FADE_STEPS * FADE_INTERVAL`).
pub const FADE_DURATION: Duration =
    Duration::from_millis(FADE_STEPS as u64 * FADE_INTERVAL.as_millis() as u64);

/// Pause between traveling-wave steps.
pub const WAVE_LIGHT_SPREAD_DELAY: Duration = Duration::from_millis(80);
/// How long each wave segment stays lit before it self-clears.
pub const WAVE_LIGHT_DURATION: Duration = Duration::from_millis(120);

/// Arrival-delay range when the wall hangs in the middle of the room.
pub const NORMAL_DELAY_RANGE: (Duration, Duration) =
    (Duration::from_secs(2), Duration::from_secs(5));
/// Arrival-delay range when the wall hangs in a corner; hits arrive slower.
pub const CORNER_DELAY_RANGE: (Duration, Duration) =
    (Duration::from_secs(5), Duration::from_secs(10));

/// Idle pause of the driver loop between due-time checks.
pub const IDLE_PAUSE: Duration = Duration::from_millis(5);
