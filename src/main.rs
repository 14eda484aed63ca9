//! usbkeylog - recover keystrokes from a USB keyboard capture.
//!
//! Runs `tshark` over the capture, decodes every boot-keyboard report
//! and prints the reconstructed text twice: escaped, then literal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use usbkeylog::capture::tshark::{self, Extractor};
use usbkeylog::config::{DEFAULT_EXTRACTOR, DEFAULT_REPEAT_LIMIT};
use usbkeylog::render::Report;

/// Parse keyboard report data and output as text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the pcap/pcapng capture file.
    capture: PathBuf,

    /// Treat CAPTURE as pre-extracted `tshark -T fields` output.
    #[arg(long)]
    fields: bool,

    /// Extractor program to run.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_EXTRACTOR)]
    tshark: String,

    /// Consecutive reports of a held key to swallow before auto-repeat.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_REPEAT_LIMIT)]
    repeat_limit: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let output = if args.fields {
        tshark::read_fields(&args.capture)
    } else {
        let extractor = Extractor::new(args.tshark.as_str());
        info!("Extracting HID payloads with {}", extractor.program());
        extractor.extract(&args.capture)
    };
    let output = output
        .with_context(|| format!("failed to extract reports from {}", args.capture.display()))?;

    let transcript = usbkeylog::transcribe_output(&output, args.repeat_limit)
        .with_context(|| format!("failed to decode {}", args.capture.display()))?;
    info!("{} reports decoded", transcript.reports);

    println!("{}", Report(&transcript.text));
    Ok(())
}
