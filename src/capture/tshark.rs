//! Field extraction through `tshark`.
//!
//! The capture container is never parsed here. `tshark` dissects it and
//! prints the HID payload fields, one packet per line, into a temporary
//! file that is removed once its contents have been read.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::config::{DEFAULT_EXTRACTOR, EXTRACTOR_FIELDS};
use crate::error::{Error, Result};

/// Runs the external extractor against a capture file.
#[derive(Clone, Debug)]
pub struct Extractor {
    program: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACTOR)
    }
}

impl Extractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the extractor invocation for `capture`.
    ///
    /// Equivalent to `tshark -r <capture> -T fields -e usbhid.data -e usb.capdata`.
    pub fn command(&self, capture: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-r").arg(capture).args(["-T", "fields"]);
        for field in EXTRACTOR_FIELDS {
            cmd.arg("-e").arg(field);
        }
        cmd
    }

    /// Run the extractor and return its complete field output.
    ///
    /// A non-zero exit status is only logged: whatever the extractor
    /// managed to write is still returned, and an empty result decodes to
    /// an empty transcript.
    pub fn extract(&self, capture: &Path) -> Result<String> {
        let sink = NamedTempFile::new()?;
        debug!("Extractor output buffered in {}", sink.path().display());

        let status = self
            .command(capture)
            .stdin(Stdio::null())
            .stdout(Stdio::from(sink.reopen()?))
            .status()
            .map_err(|source| Error::ExtractorSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!("{} exited with {}", self.program, status);
        }

        let output = fs::read_to_string(sink.path())?;
        info!(
            "{} extracted {} lines from {}",
            self.program,
            output.lines().count(),
            capture.display()
        );
        Ok(output)
    }
}

/// Load field output that was extracted ahead of time.
pub fn read_fields(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
