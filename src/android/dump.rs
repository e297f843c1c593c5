use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::types::DumpText;

/// Source of `dump resources` output for a package.
///
/// A missing dump is a legitimate outcome for malformed or oddly packaged APKs, so
/// implementations report failure as `None` rather than an error.
pub trait ResourceDump {
    fn dump_resources(&self, apk_filepath: &Path) -> Option<DumpText>;
}

/// Runs an `aapt`-compatible binary as `<program> dump resources <apk>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AaptTool {
    program: String,
}

impl AaptTool {
    pub fn new(program: impl Into<String>) -> Self {
        AaptTool {
            program: program.into(),
        }
    }

    /// The legacy `aapt` binary found on `PATH`.
    pub fn aapt() -> Self {
        AaptTool::new("aapt")
    }

    /// The `aapt2` binary found on `PATH`.
    pub fn aapt2() -> Self {
        AaptTool::new("aapt2")
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ResourceDump for AaptTool {
    fn dump_resources(&self, apk_filepath: &Path) -> Option<DumpText> {
        let output = match Command::new(&self.program)
            .arg("dump")
            .arg("resources")
            .arg(apk_filepath)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to execute {}: {}", self.program, e);
                return None;
            }
        };

        if !output.status.success() {
            warn!(
                "{} dump resources {} exited with {}",
                self.program,
                apk_filepath.display(),
                output.status
            );
            debug!("stderr: {}", String::from_utf8_lossy(&output.stderr));
            return None;
        }

        debug!(
            "{} dumped {} bytes of resources for {}",
            self.program,
            output.stdout.len(),
            apk_filepath.display()
        );
        Some(DumpText::from_bytes(output.stdout))
    }
}

/// Fixed dump text, for callers that already captured the tool output.
impl ResourceDump for DumpText {
    fn dump_resources(&self, _apk_filepath: &Path) -> Option<DumpText> {
        Some(self.clone())
    }
}

impl<D: ResourceDump + ?Sized> ResourceDump for &D {
    fn dump_resources(&self, apk_filepath: &Path) -> Option<DumpText> {
        (**self).dump_resources(apk_filepath)
    }
}
