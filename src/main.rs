//! Terminal driver for the sorting step engines.
//!
//! Reads one key name per line from stdin (`KeyZ`, `Space`, `KeyP`, ...),
//! ticks the controller at the configured rate and logs the values every
//! time they come to rest.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use clap::Parser;
use sortvis::{
    util::frame_timing::FrameTiming, Algorithm, Controller, KeyBindings,
    Options, SortvisError, Value,
};

#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "sortvis", about = "Step through sorting algorithms")]
struct Cli {
    /// TOML options file; command-line flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of values (`0..length` unless --values is given).
    #[arg(long)]
    length: Option<usize>,
    /// Explicit comma-separated values.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<Value>>,
    /// Ticks per second outside fast mode.
    #[arg(long)]
    fps: Option<u32>,
    /// Start in fast mode.
    #[arg(long)]
    fast: bool,
    /// Start paused.
    #[arg(long)]
    paused: bool,
    /// Shuffle the values before the first run.
    #[arg(long)]
    shuffle: bool,
    /// Algorithm to start immediately (bubble, insertion, quick).
    #[arg(long)]
    algorithm: Option<Algorithm>,
    /// Comma-separated key names applied before reading stdin.
    #[arg(long, value_delimiter = ',')]
    script: Vec<String>,
    /// Do not read keys from stdin; exit once the sequence is at rest.
    #[arg(long)]
    no_stdin: bool,
    /// Print the options JSON Schema and exit.
    #[arg(long)]
    dump_schema: bool,
}

fn build_options(cli: &Cli) -> Result<Options, SortvisError> {
    let mut options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(values) = &cli.values {
        options.sequence.length = cli.length.unwrap_or(values.len());
        options.sequence.values = Some(values.clone());
    } else if let Some(length) = cli.length {
        options.sequence.length = length;
        options.sequence.values = None;
    }
    if let Some(fps) = cli.fps {
        options.playback.fps = fps;
    }
    if cli.algorithm.is_some() {
        options.playback.algorithm = cli.algorithm;
    }
    options.playback.fast_mode |= cli.fast;
    options.playback.start_paused |= cli.paused;
    options.sequence.shuffle_on_start |= cli.shuffle;
    options.validate()?;
    Ok(options)
}

fn apply_key(controller: &mut Controller, keys: &KeyBindings, key: &str) {
    if key.trim().is_empty() {
        return;
    }
    match keys.lookup(key) {
        Some(command) => controller.execute(command),
        None => log::warn!("unbound key {:?}", key.trim()),
    }
}

/// Forward stdin lines to the main loop until EOF.
fn spawn_stdin_reader() -> Result<Receiver<String>, SortvisError> {
    let (tx, rx) = mpsc::channel();
    let _reader = thread::Builder::new()
        .name("sortvis-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Apply every queued key. Returns `false` once stdin has closed.
fn drain_keys(
    rx: &Receiver<String>,
    controller: &mut Controller,
    keys: &KeyBindings,
) -> bool {
    loop {
        match rx.try_recv() {
            Ok(key) => apply_key(controller, keys, &key),
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => return false,
        }
    }
}

fn report(controller: &Controller) {
    log::info!("{:?}", controller.dispatcher().sequence().values());
}

fn run(cli: &Cli) -> Result<(), SortvisError> {
    if cli.dump_schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())
            .map_err(|e| SortvisError::OptionsParse(e.to_string()))?;
        writeln!(std::io::stdout().lock(), "{schema}")?;
        return Ok(());
    }

    let options = build_options(cli)?;
    let keys = &options.keybindings;
    let mut controller = Controller::from_options(&options)?;
    for key in &cli.script {
        apply_key(&mut controller, keys, key);
    }

    let rx = if cli.no_stdin {
        None
    } else {
        Some(spawn_stdin_reader()?)
    };
    let mut input_open = rx.is_some();
    let mut timing = FrameTiming::new(options.playback.fps);

    loop {
        if !controller.fast_mode() {
            thread::sleep(timing.time_until_next_frame());
        }
        timing.end_frame();

        if let Some(rx) = &rx {
            input_open = input_open && drain_keys(rx, &mut controller, keys);
        }
        if controller.quit_requested() {
            break;
        }

        let outcome = controller.tick();
        if outcome.settled_now {
            report(&controller);
        }
        if !input_open
            && !outcome.stepped
            && (controller.dispatcher().is_idle() || controller.paused())
        {
            break;
        }
    }
    log::debug!("exiting at {:.1} fps", timing.fps());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
