// Command line arguments and runtime configuration.
// Parses flags with clap and resolves them into the values the app runs with.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::Rng;

use crate::blink::BlinkTiming;
use crate::cache::StoragePaths;
use crate::display::Palette;
use crate::error::{Result, VerseError};
use crate::esv::client::ESV_API_BASE;
use crate::verses::DEFAULT_BASE_YEAR;

/// BCM 27 is physical pin 13 on the 40-pin header.
pub const DEFAULT_LED_PIN: u8 = 27;

/// Bounds of the random delay used when none is given.
const RANDOM_DELAY_MINUTES: std::ops::RangeInclusive<u32> = 10..=30;

/// Fighter Verses, weekly or random, with a delay between them and an LED
/// blink as a reminder to pray, rejoice and give thanks.
#[derive(Parser)]
#[command(name = "fighter-verses", version)]
pub struct Args {
    /// Minutes to show each verse (random 10-30 when omitted or 0)
    #[arg(short = 'm', long = "minutes", value_name = "MINUTES")]
    pub minutes: Option<u32>,

    /// ESV API token; only needed once, it is saved for later runs
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Choose a random Fighter Verse instead of this week's
    #[arg(short = 'r', long = "random")]
    pub random: bool,

    /// Show verses one after another without blinking or waiting for Enter
    #[arg(short = 'c', long = "continuous")]
    pub continuous: bool,

    /// Verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// GPIO pin (BCM numbering) driving the reminder LED
    #[arg(long, value_name = "BCM", default_value_t = DEFAULT_LED_PIN)]
    pub led_pin: u8,

    /// Do not touch GPIO; blinking is only logged
    #[arg(long)]
    pub no_led: bool,

    /// First year of the five-year schedule
    #[arg(long, value_name = "YEAR", default_value_t = DEFAULT_BASE_YEAR)]
    pub base_year: i32,

    /// Directory for the verse cache and token (defaults to platform directories)
    #[arg(long, value_name = "DIR", env = "FIGHTER_VERSES_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// How the verse for each cycle is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The verse for the current ISO week.
    Weekly,
    /// A uniformly random verse every cycle.
    Random,
}

/// Everything the main loop needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub delay_minutes: u32,
    pub selection: Selection,
    pub continuous: bool,
    pub base_year: i32,
    pub led_pin: u8,
    pub led_enabled: bool,
    pub paths: StoragePaths,
    pub api_base: String,
    /// Length of one countdown step.
    pub minute: Duration,
    pub blink: BlinkTiming,
    pub palette: Palette,
}

impl Config {
    /// Resolve parsed arguments; `rng` picks the delay when none was given.
    pub fn from_args<R: Rng + ?Sized>(args: &Args, rng: &mut R) -> Result<Self> {
        let paths = StoragePaths::resolve(args.data_dir.as_deref()).ok_or_else(|| {
            VerseError::Other(
                "cannot determine a home directory, pass --data-dir".to_string(),
            )
        })?;

        Ok(Self {
            delay_minutes: delay_minutes(args.minutes, rng),
            selection: if args.random {
                Selection::Random
            } else {
                Selection::Weekly
            },
            continuous: args.continuous,
            base_year: args.base_year,
            led_pin: args.led_pin,
            led_enabled: !args.no_led,
            paths,
            api_base: ESV_API_BASE.to_string(),
            minute: Duration::from_secs(60),
            blink: BlinkTiming::default(),
            palette: Palette::default(),
        })
    }
}

/// The requested delay, or a random one when absent or zero.
pub fn delay_minutes<R: Rng + ?Sized>(requested: Option<u32>, rng: &mut R) -> u32 {
    match requested {
        Some(minutes) if minutes > 0 => minutes,
        _ => rng.random_range(RANDOM_DELAY_MINUTES),
    }
}
