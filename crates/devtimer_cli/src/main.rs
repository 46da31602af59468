//! Terminal entry point for the Dev Session Timer core.
//!
//! # Responsibility
//! - Provide a smoke probe for `devtimer_core` linkage.
//! - Drive a live stopwatch in the terminal through the same core services.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use devtimer_core::{
    format_time, init_logging_with, parse_preset, LogOptions, StopwatchConfig, StopwatchService,
    TimeInput,
};
use log::info;
use std::io::Write;
use std::time::{Duration, Instant};

const RENDER_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "devtimer", version, about = "Dev session stopwatch")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, default_value = devtimer_core::default_log_level())]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// Format milliseconds as HH:MM:SS:ms.
    Format { ms: u64 },
    /// List configured presets with their durations.
    Presets,
    /// Run a live stopwatch for a fixed duration.
    Run {
        /// Wall-clock seconds to run before stopping.
        #[arg(long = "for", default_value_t = 5)]
        for_secs: u64,
        /// Start time as HH:MM:SS (clamped to 23:59:59).
        #[arg(long, conflicts_with = "preset")]
        from: Option<String>,
        /// Start from a preset label such as 02:30.
        #[arg(long)]
        preset: Option<String>,
        /// Tick interval in milliseconds (overrides DEVTIMER_TICK_INTERVAL_MS).
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging_with(&LogOptions {
            level: cli.log_level.clone(),
            log_dir: log_dir.to_string(),
            echo_warnings: true,
        })
        .context("failed to initialize logging")?;
    }

    match cli.command {
        Command::Ping => {
            println!("devtimer_core ping={}", devtimer_core::ping());
            println!("devtimer_core version={}", devtimer_core::core_version());
        }
        Command::Format { ms } => println!("{}", format_time(ms)),
        Command::Presets => {
            for label in StopwatchConfig::from_env().presets {
                let seconds = parse_preset(&label)?;
                println!("{label}\t{}", format_time(seconds.saturating_mul(1_000)).full());
            }
        }
        Command::Run {
            for_secs,
            from,
            preset,
            interval_ms,
        } => run(for_secs, from.as_deref(), preset.as_deref(), interval_ms)?,
    }

    Ok(())
}

fn run(
    for_secs: u64,
    from: Option<&str>,
    preset: Option<&str>,
    interval_ms: Option<u64>,
) -> Result<()> {
    let mut config = StopwatchConfig::from_env();
    if let Some(ms) = interval_ms {
        config = config.with_tick_interval_ms(ms);
    }
    let mut stopwatch = StopwatchService::new(config);

    if let Some(from) = from {
        let normalized = stopwatch.set_time_from_input(&parse_hms(from)?)?;
        info!(
            "event=cli_set_time module=cli status=ok h={} m={} s={}",
            normalized.h, normalized.m, normalized.s
        );
    }
    if let Some(label) = preset {
        stopwatch.apply_preset(label)?;
    }

    let run_for = Duration::from_secs(for_secs);
    let started = Instant::now();
    stopwatch.start()?;

    let mut stdout = std::io::stdout();
    while started.elapsed() < run_for {
        write!(stdout, "\r{}", stopwatch.display())?;
        stdout.flush()?;
        std::thread::sleep(RENDER_INTERVAL);
    }
    stopwatch.pause();

    writeln!(stdout, "\r{}", stopwatch.display())?;
    Ok(())
}

fn parse_hms(text: &str) -> Result<TimeInput> {
    let parts = text.split(':').collect::<Vec<_>>();
    let [h, m, s] = parts.as_slice() else {
        bail!("expected HH:MM:SS, got `{text}`");
    };
    Ok(TimeInput::new(*h, *m, *s))
}
