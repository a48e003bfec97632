//! Line-oriented file writing

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered writer that appends `\n` after every record
pub struct LineWriter {
    writer: BufWriter<File>,
    path: std::path::PathBuf,
    written: usize,
}

impl LineWriter {
    /// Create or truncate `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    /// Write one record followed by a newline
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").map_err(|e| Error::io(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    /// Write raw text without adding a terminator
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&self.path, e))
    }

    /// Flush and return the number of records written with [`write_line`](Self::write_line)
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|e| Error::io(&self.path, e))?;
        Ok(self.written)
    }
}

/// Write each item on its own line, replacing any existing file
pub fn write_lines<I, S>(lines: I, path: impl AsRef<Path>) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = LineWriter::create(path)?;
    for line in lines {
        writer.write_line(line.as_ref())?;
    }
    writer.finish()
}
