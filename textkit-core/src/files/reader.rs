//! Line-oriented file reading

use crate::config::{DecodeMode, LoadOptions};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads a file line by line, decoding each line according to a [`DecodeMode`]
///
/// Yielded lines keep their terminator so callers that copy lines verbatim
/// (file chunking) reproduce the input byte for byte.
pub struct LineReader {
    path: PathBuf,
    reader: BufReader<File>,
    decode: DecodeMode,
    line_no: usize,
    buf: Vec<u8>,
}

impl LineReader {
    /// Open a file for line reading
    pub fn open(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            decode: options.decode,
            line_no: 0,
            buf: Vec::new(),
        })
    }

    /// 1-based number of the line most recently returned
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Path being read
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                Some(decode_line(&self.buf, self.decode).ok_or_else(|| Error::Decode {
                    path: self.path.clone(),
                    line: self.line_no,
                }))
            }
            Err(e) => Some(Err(Error::io(&self.path, e))),
        }
    }
}

fn decode_line(bytes: &[u8], mode: DecodeMode) -> Option<String> {
    match mode {
        DecodeMode::Strict => std::str::from_utf8(bytes).ok().map(str::to_owned),
        DecodeMode::Lossy => Some(decode_dropping_invalid(bytes)),
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences
pub fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // valid_up_to guarantees this prefix is well-formed
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(len) => bytes = &rest[len..],
                    // truncated sequence at the end of input
                    None => return out,
                }
            }
        }
    }
}

/// Read every line of a file with trailing whitespace removed
pub fn load_to_list(path: impl AsRef<Path>, options: LoadOptions) -> Result<Vec<String>> {
    LineReader::open(path, options)?
        .map(|line| line.map(|l| l.trim_end().to_string()))
        .collect()
}

/// Read every line of a file into a set
pub fn load_to_set(path: impl AsRef<Path>, options: LoadOptions) -> Result<HashSet<String>> {
    LineReader::open(path, options)?
        .map(|line| line.map(|l| l.trim_end().to_string()))
        .collect()
}

/// Count the lines of a file
///
/// A final line without a terminator still counts. Decoding is not
/// performed, so the count never fails on invalid UTF-8.
pub fn count_lines(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io(path, e))?;
        if read == 0 {
            return Ok(count);
        }
        count += 1;
    }
}
