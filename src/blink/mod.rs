// Reminder LED module.
// The blink worker, its command mailbox and the LED backends it drives.

pub mod controller;
pub mod led;

pub use controller::{BlinkHandle, BlinkTiming};
pub use led::open_led;
