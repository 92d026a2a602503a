//! Conversion commands: `convert` and `now`.

use crate::clock::{clock_for, BerlinClock, ClockTime};
use crate::commands::{CommandArgs, CommandExecutor};
use crate::config::{Config, DisplayConfig, OutputFormat};
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use log::{debug, error};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ClockOutput<'a> {
    time: &'a str,
    clock: &'a BerlinClock,
}

/// Render a converted clock according to the display settings
pub fn render(time: &str, clock: &BerlinClock, display: &DisplayConfig) -> Result<String> {
    match display.format {
        OutputFormat::Text => {
            let separator = display.line_ending.as_str();
            let rows = clock.to_string_with(separator);
            if display.show_input {
                Ok(format!("{}{}{}", time, separator, rows))
            } else {
                Ok(rows)
            }
        }
        OutputFormat::Json => serde_json::to_string(&ClockOutput { time, clock })
            .context("Failed to serialize clock"),
    }
}

/// Convert every time in `times`, returning the rendered output of each.
///
/// Invalid times are reported in place; the whole batch is always attempted.
pub fn convert_all(times: &[String], display: &DisplayConfig) -> Vec<Result<String>> {
    times
        .iter()
        .map(|time| -> Result<String> {
            let clock = clock_for(time)?;
            render(time, &clock, display)
        })
        .collect()
}

pub fn handle_convert(times: &[String], format: Option<OutputFormat>) -> Result<()> {
    let display = display_settings(format)?;
    let results = convert_all(times, &display);

    let mut failed = 0;
    for (time, result) in times.iter().zip(results) {
        match result {
            Ok(output) => println!("{}", output),
            Err(e) => {
                error!("Failed to convert '{}': {}", time, e);
                eprintln!("Error: {}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} times could not be converted", failed, times.len()));
    }
    Ok(())
}

pub fn handle_now(format: Option<OutputFormat>) -> Result<()> {
    let display = display_settings(format)?;
    let now = Local::now().time();
    let time = now.format("%H:%M:%S").to_string();
    debug!("Current local time: {}", time);

    let clock = BerlinClock::from(ClockTime::from_naive_time(now));
    println!("{}", render(&time, &clock, &display)?);
    Ok(())
}

fn display_settings(format: Option<OutputFormat>) -> Result<DisplayConfig> {
    let mut display = Config::load()?.display;
    if let Some(format) = format {
        display.format = format;
    }
    Ok(display)
}

fn format_flag(args: &CommandArgs) -> Result<Option<OutputFormat>> {
    match args.flags.get("--format") {
        None => Ok(None),
        Some(Some(value)) if value.eq_ignore_ascii_case("text") => Ok(Some(OutputFormat::Text)),
        Some(Some(value)) if value.eq_ignore_ascii_case("json") => Ok(Some(OutputFormat::Json)),
        Some(value) => Err(anyhow!("Invalid --format {:?}. Expected text or json", value)),
    }
}

pub struct ConvertCommand;

impl CommandExecutor for ConvertCommand {
    fn execute(&self, args: CommandArgs) -> Result<()> {
        if args.args.is_empty() {
            println!("Usage: convert <HH:mm:ss> [<HH:mm:ss>...] [--format text|json]");
            return Ok(());
        }
        handle_convert(&args.args, format_flag(&args)?)
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "convert" | "show")
    }
}

pub struct NowCommand;

impl CommandExecutor for NowCommand {
    fn execute(&self, args: CommandArgs) -> Result<()> {
        handle_now(format_flag(&args)?)
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "now"
    }
}
