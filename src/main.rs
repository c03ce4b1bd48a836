// fighter-verses entry point.
// Parses arguments, sets up logging, storage, the LED worker and runs the main loop.

mod app;
mod blink;
mod cache;
mod config;
mod credential;
mod display;
mod error;
mod esv;
mod input;
mod verses;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::app::App;
use crate::blink::{BlinkHandle, open_led};
use crate::cache::VerseCache;
use crate::config::{Args, Config};
use crate::display::Screen;
use crate::error::Result;
use crate::esv::EsvClient;
use crate::input::AckReceiver;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; warnings always, everything of ours with --verbose.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .parse_default_env()
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_args(&args, &mut rand::rng())?;

    let env_token = std::env::var(credential::TOKEN_ENV).ok();
    let token = credential::resolve(
        args.token.as_deref(),
        env_token.as_deref(),
        &config.paths.token,
    )?;
    let client = EsvClient::new(&token, &config.api_base)?;

    let cache = VerseCache::load(&config.paths.cache);
    if cache.is_empty() {
        log::info!("Verse cache is empty, verses will be fetched as they come up");
    }
    log::info!(
        "{} cached verses, showing each for {} minutes",
        cache.len(),
        config.delay_minutes
    );

    let led = open_led(config.led_pin, config.led_enabled);
    let blink = BlinkHandle::spawn(led, config.blink)?;
    let acks = AckReceiver::spawn_stdin()?;
    let screen = Screen::new(io::stdout(), config.palette);

    App::new(config, client, cache, screen, blink, acks)
        .run()
        .await
}
