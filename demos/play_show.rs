//! Play a hit-event file as an ANSI true-color rendering of the LED wall.
//!
//! Usage: `demo_play_show [path/to/hits.json] [--corner]`
//!
//! The terminal stands in for the physical strips: every committed frame is
//! painted as one block per grid cell, holes drawn as dots. `RUST_LOG=debug`
//! shows per-hit dispatch logs (on stderr, below the wall).

use std::io::{Write as _, stdout};

use muon_wall::config::{COLS, LED_COUNT_A, LED_COUNT_B, ROWS};
use muon_wall::grid::{Strip, strip_address};
use muon_wall::panel::{StripDriver, colors};
use muon_wall::show::{DelayProfile, ShowDriver};
use muon_wall::{Result, events};
use smart_leds::RGB8;
use tracing_subscriber::EnvFilter;

/// Committed colors are dimmed by the global brightness for the real wall;
/// scale them back up so the terminal preview is visible.
const PREVIEW_GAIN: f32 = 16.0;

/// Terminal stand-in for the two physical strips.
struct TermStrips {
    frame_a: [RGB8; LED_COUNT_A],
    frame_b: [RGB8; LED_COUNT_B],
}

impl TermStrips {
    fn new() -> Self {
        print!("\x1b[2J\x1b[?25l"); // clear screen, hide cursor
        Self {
            frame_a: [colors::BLACK; LED_COUNT_A],
            frame_b: [colors::BLACK; LED_COUNT_B],
        }
    }

    fn render(&self) {
        let mut out = String::from("\x1b[H");
        for row in 0..ROWS as i32 {
            for col in 0..COLS as i32 {
                match strip_address(row, col) {
                    Some(address) => {
                        let color = match address.strip {
                            Strip::A => self.frame_a[address.index],
                            Strip::B => self.frame_b[address.index],
                        };
                        let gain = |c: u8| (f32::from(c) * PREVIEW_GAIN).min(255.0) as u8;
                        out.push_str(&format!(
                            "\x1b[38;2;{};{};{}m██",
                            gain(color.r),
                            gain(color.g),
                            gain(color.b)
                        ));
                    }
                    None => out.push_str("\x1b[38;2;40;40;40m··"),
                }
            }
            out.push_str("\x1b[0m\r\n");
        }
        print!("{out}");
        let _ = stdout().flush();
    }
}

impl StripDriver for TermStrips {
    fn set_pixel(&mut self, strip: Strip, index: usize, color: RGB8) {
        match strip {
            Strip::A => self.frame_a[index] = color,
            Strip::B => self.frame_b[index] = color,
        }
    }

    fn write(&mut self, strip: Strip) {
        // The panel always commits A then B; repaint once per commit.
        if strip == Strip::B {
            self.render();
        }
    }
}

impl Drop for TermStrips {
    fn drop(&mut self) {
        println!("\x1b[?25h\x1b[0m"); // restore cursor
        let _ = stdout().flush();
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut path = String::from("hits.json");
    let mut profile = DelayProfile::Normal;
    for arg in std::env::args().skip(1) {
        if arg == "--corner" {
            profile = DelayProfile::Corner;
        } else {
            path = arg;
        }
    }

    let hits = events::load_hits(&path)?;
    let mut driver = ShowDriver::new(TermStrips::new());
    driver.play(&hits, profile)
}
