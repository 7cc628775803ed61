//! Buffered writer for the generated batch script.

use crate::error::{CoreError, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Last line of every script, keeps the console window open.
pub const PAUSE_SENTINEL: &str = "pause";

pub struct ScriptWriter<W: Write> {
    out: BufWriter<W>,
    target: PathBuf,
    lines: usize,
}

impl ScriptWriter<File> {
    /// Creates (or truncates) the script file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| CoreError::io(path, e))?;
        tracing::debug!("Writing script to {}", path.display());
        Ok(Self::new(file, path))
    }
}

impl<W: Write> ScriptWriter<W> {
    /// Wraps an arbitrary sink. `target` is only used in error messages.
    pub fn new(inner: W, target: impl Into<PathBuf>) -> Self {
        Self {
            out: BufWriter::new(inner),
            target: target.into(),
            lines: 0,
        }
    }

    pub fn push(&mut self, line: &impl Display) -> Result<()> {
        writeln!(self.out, "{line}").map_err(|e| CoreError::io(&self.target, e))?;
        self.lines += 1;
        Ok(())
    }

    pub fn push_all<'a, D: Display + 'a>(
        &mut self,
        lines: impl IntoIterator<Item = &'a D>,
    ) -> Result<()> {
        for line in lines {
            self.push(line)?;
        }
        Ok(())
    }

    /// Appends the pause sentinel, flushes, and returns the number of lines written.
    pub fn finish(mut self) -> Result<usize> {
        self.push(&PAUSE_SENTINEL)?;
        self.out
            .flush()
            .map_err(|e| CoreError::io(&self.target, e))?;
        Ok(self.lines)
    }
}
