//! hpgl-scan command-line driver
//!
//! Reads a plot file, scans it and prints what was found. Output produced
//! before a parse error is still written; the error is returned afterwards.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{Args, Config, OutputFormat};
use crate::error::ParseError;
use crate::parser::{parse_hpgl, scan_commands, PenEvent, PenKind};
use crate::path::PlotPath;

/// Run hpgl-scan with the process arguments
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = Config::from_args(args)?;
    let document = read_input(config.input.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_output(&config, &document, &mut out)
}

fn init_logging(level: &str) {
    // RUST_LOG, when set, overrides --log-level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Read the whole input, from a file or stdin
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read standard input")?;
            bytes
        }
    };
    Ok(decode(bytes))
}

/// Decode plot data, falling back to one character per byte
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "Input is not valid UTF-8 ({}), reading it as Latin-1",
                e.utf8_error()
            );
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Scan `document` and write it in the configured format
pub fn write_output<W: Write>(config: &Config, document: &str, out: &mut W) -> Result<()> {
    let result = match config.format {
        OutputFormat::Events => write_events(document, out)?,
        OutputFormat::Json => write_json(document, config.pretty, out)?,
        OutputFormat::Path => write_path(document, out)?,
        OutputFormat::Commands => write_commands(document, out)?,
    };
    out.flush().context("Failed to write output")?;

    result.context("Invalid HP-GL/2 document")
}

fn format_event(event: &PenEvent) -> String {
    let mut line = String::from(match event.kind {
        PenKind::PenUp => "PU",
        PenKind::PenDown => "PD",
    });
    for (x, y) in &event.pairs {
        line.push_str(&format!(" {x},{y}"));
    }
    line
}

// The writers below fail on I/O; the inner result is the scan outcome.

fn write_events<W: Write>(document: &str, out: &mut W) -> Result<Result<(), ParseError>> {
    for event in parse_hpgl(document) {
        match event {
            Ok(event) => writeln!(out, "{}", format_event(&event))?,
            Err(e) => return Ok(Err(e)),
        }
    }
    Ok(Ok(()))
}

fn write_json<W: Write>(
    document: &str,
    pretty: bool,
    out: &mut W,
) -> Result<Result<(), ParseError>> {
    let mut events = Vec::new();
    let mut outcome = Ok(());
    for event in parse_hpgl(document) {
        match event {
            Ok(event) => events.push(event),
            Err(e) => outcome = Err(e),
        }
    }

    if pretty {
        serde_json::to_writer_pretty(&mut *out, &events)?;
    } else {
        serde_json::to_writer(&mut *out, &events)?;
    }
    writeln!(out)?;
    Ok(outcome)
}

fn write_path<W: Write>(document: &str, out: &mut W) -> Result<Result<(), ParseError>> {
    let mut path = PlotPath::new();
    let mut outcome = Ok(());
    for event in parse_hpgl(document) {
        match event {
            Ok(event) => path.push(&event),
            Err(e) => outcome = Err(e),
        }
    }
    writeln!(out, "{path}")?;
    Ok(outcome)
}

fn write_commands<W: Write>(document: &str, out: &mut W) -> Result<Result<(), ParseError>> {
    let commands = scan_commands(document);
    let input = commands.input();
    for command in commands {
        match command {
            Ok(command) => writeln!(
                out,
                "{}\t{:?}\t{:?}",
                command.start,
                command.kind,
                command.text(input)
            )?,
            Err(e) => return Ok(Err(e)),
        }
    }
    Ok(Ok(()))
}
