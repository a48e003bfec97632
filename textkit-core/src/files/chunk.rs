//! Splitting a large file into smaller files
//!
//! Three modes are supported:
//! - **Count**: divide the file into `N` chunks of `total / N` lines, written
//!   as `<stem>_1.txt`, `<stem>_2.txt`, ...
//! - **Lines**: a new file every `L` lines, named `<stem>aa`, `<stem>ab`, ...
//! - **Bytes**: a new file every `B` bytes, same naming as lines mode.
//!
//! Outputs land next to the input, whose final extension is removed to form
//! `<stem>`. The input is never modified.

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::files::reader::{count_lines, LineReader};
use crate::files::writer::LineWriter;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Highest number of outputs the two-letter suffix scheme can name
pub const MAX_SUFFIXED_OUTPUTS: usize = 26 * 26;

/// How a file is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMethod {
    /// Into `chunks` files of equal line count
    Count {
        /// Target number of files
        chunks: usize,
        /// Write leftover lines as an extra file instead of dropping them
        keep_remainder: bool,
    },
    /// A new file every `lines_per_file` lines
    Lines {
        /// Lines per output file
        lines_per_file: usize,
    },
    /// A new file every `bytes_per_file` bytes
    Bytes {
        /// Bytes per output file
        bytes_per_file: u64,
    },
}

impl SplitMethod {
    /// Build a method from loosely typed arguments
    ///
    /// `method` is one of `num`, `line_num` or `mem`. `count` and `line_num`
    /// must be integers and `mem` a size such as `5k` or `10M`. Every
    /// argument is checked, whichever method is chosen.
    pub fn parse(method: &str, count: &str, line_num: &str, mem: &str) -> Result<Self> {
        let chunks = parse_positive(count, "chunk count")?;
        let lines_per_file = parse_positive(line_num, "line count")?;

        let method = match method {
            "num" => SplitMethod::Count {
                chunks,
                keep_remainder: false,
            },
            "line_num" => SplitMethod::Lines { lines_per_file },
            "mem" => SplitMethod::Bytes {
                bytes_per_file: parse_size(mem)?,
            },
            other => {
                return Err(Error::validation(format!(
                    "unknown split method '{other}', expected one of num, line_num, mem"
                )))
            }
        };
        Ok(method)
    }

    fn validate(&self) -> Result<()> {
        match *self {
            SplitMethod::Count { chunks: 0, .. } => {
                Err(Error::validation("chunk count must be greater than 0"))
            }
            SplitMethod::Lines { lines_per_file: 0 } => {
                Err(Error::validation("line count must be greater than 0"))
            }
            SplitMethod::Bytes { bytes_per_file: 0 } => {
                Err(Error::validation("byte size must be greater than 0"))
            }
            _ => Ok(()),
        }
    }
}

fn parse_positive(value: &str, what: &str) -> Result<usize> {
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| Error::validation(format!("{what} must be a number, got '{value}'")))?;
    if n == 0 {
        return Err(Error::validation(format!("{what} must be greater than 0")));
    }
    Ok(n)
}

/// Parse a byte size such as `512`, `5k`, `10M` or `1GB`
///
/// `K`, `M`, `G` (either case) are powers of 1024, `KB`, `MB`, `GB` are
/// powers of 1000 and `b` is 512-byte blocks.
pub fn parse_size(value: &str) -> Result<u64> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);

    let number: u64 = digits
        .parse()
        .map_err(|_| Error::validation(format!("invalid size '{value}'")))?;
    let multiplier: u64 = match unit {
        "" => 1,
        "b" => 512,
        "k" | "K" => 1 << 10,
        "m" | "M" => 1 << 20,
        "g" | "G" => 1 << 30,
        "KB" | "kB" => 1_000,
        "MB" => 1_000_000,
        "GB" => 1_000_000_000,
        _ => {
            return Err(Error::validation(format!(
                "invalid size unit '{unit}' in '{value}'"
            )))
        }
    };

    let bytes = number
        .checked_mul(multiplier)
        .ok_or_else(|| Error::validation(format!("size '{value}' is too large")))?;
    if bytes == 0 {
        return Err(Error::validation("byte size must be greater than 0"));
    }
    Ok(bytes)
}

/// Input path with its final extension removed
pub fn output_stem(path: &Path) -> PathBuf {
    path.with_extension("")
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Path of the `index`-th (0-based) output in count mode
pub fn numbered_output(stem: &Path, index: usize) -> PathBuf {
    with_suffix(stem, &format!("_{}.txt", index + 1))
}

/// Path of the `index`-th (0-based) output in lines and bytes modes
pub fn lettered_output(stem: &Path, index: usize) -> Result<PathBuf> {
    if index >= MAX_SUFFIXED_OUTPUTS {
        return Err(Error::validation(format!(
            "split would produce more than {MAX_SUFFIXED_OUTPUTS} files"
        )));
    }
    let first = char::from(b'a' + (index / 26) as u8);
    let second = char::from(b'a' + (index % 26) as u8);
    Ok(with_suffix(stem, &format!("{first}{second}")))
}

/// Split `path` according to `method`, returning the created files in order
pub fn split_file(
    path: impl AsRef<Path>,
    method: SplitMethod,
    options: LoadOptions,
) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    method.validate()?;
    let stem = output_stem(path);
    log::info!("splitting {} with prefix {}", path.display(), stem.display());

    match method {
        SplitMethod::Count {
            chunks,
            keep_remainder,
        } => split_by_count(path, &stem, chunks, keep_remainder, options),
        SplitMethod::Lines { lines_per_file } => split_by_lines(path, &stem, lines_per_file),
        SplitMethod::Bytes { bytes_per_file } => split_by_bytes(path, &stem, bytes_per_file),
    }
}

/// Count-mode splitting
///
/// A chunk is flushed as soon as the number of lines read so far equals
/// `each * (k + 1)` where `each = total / chunks` and `k` is the number of
/// chunks already flushed. The test is applied on every line, so when the
/// leftover after `chunks` files is at least `each` lines further chunks are
/// flushed too; when `each` is 0 nothing is flushed until the remainder.
///
/// Lines are counted from 1. A test against a 0-based line index would
/// instead flush the first line alone when `each` is 0; here 3 lines into 5
/// chunks without the remainder produce no file at all.
fn split_by_count(
    path: &Path,
    stem: &Path,
    chunks: usize,
    keep_remainder: bool,
    options: LoadOptions,
) -> Result<Vec<PathBuf>> {
    let total = count_lines(path)?;
    let each = total / chunks;
    if each == 0 {
        log::warn!(
            "{} has {} lines, fewer than {} chunks",
            path.display(),
            total,
            chunks
        );
    }

    let mut outputs = Vec::new();
    let mut current: Vec<String> = Vec::with_capacity(each);
    let mut read = 0usize;

    for line in LineReader::open(path, options)? {
        current.push(line?);
        read += 1;
        if read == each * (outputs.len() + 1) {
            let output = numbered_output(stem, outputs.len());
            write_chunk(&output, &current)?;
            log::info!("chunk {} written to {}", outputs.len() + 1, output.display());
            outputs.push(output);
            current.clear();
        }
    }

    if !current.is_empty() {
        if keep_remainder {
            let output = numbered_output(stem, outputs.len());
            write_chunk(&output, &current)?;
            log::info!(
                "remainder of {} lines written to {}",
                current.len(),
                output.display()
            );
            outputs.push(output);
        } else {
            log::info!("dropping remainder of {} lines", current.len());
        }
    }

    Ok(outputs)
}

fn write_chunk(path: &Path, lines: &[String]) -> Result<()> {
    let mut writer = LineWriter::create(path)?;
    for line in lines {
        writer.write_raw(line)?;
    }
    writer.finish().map(|_| ())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| Error::io(path, e))
}

fn split_by_lines(path: &Path, stem: &Path, lines_per_file: usize) -> Result<Vec<PathBuf>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut outputs: Vec<PathBuf> = Vec::new();
    let mut writer: Option<BufWriter<File>> = None;
    let mut in_current = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io(path, e))?;
        if read == 0 {
            break;
        }

        if writer.is_none() || in_current == lines_per_file {
            if let (Some(mut done), Some(done_path)) = (writer.take(), outputs.last()) {
                done.flush().map_err(|e| Error::io(done_path, e))?;
            }
            let output = lettered_output(stem, outputs.len())?;
            writer = Some(create(&output)?);
            outputs.push(output);
            in_current = 0;
        }

        if let (Some(w), Some(current_path)) = (writer.as_mut(), outputs.last()) {
            w.write_all(&buf).map_err(|e| Error::io(current_path, e))?;
        }
        in_current += 1;
    }

    if let (Some(mut done), Some(done_path)) = (writer, outputs.last()) {
        done.flush().map_err(|e| Error::io(done_path, e))?;
    }
    Ok(outputs)
}

fn split_by_bytes(path: &Path, stem: &Path, bytes_per_file: u64) -> Result<Vec<PathBuf>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut outputs = Vec::new();

    loop {
        let mut piece = Vec::new();
        let read = (&mut reader)
            .take(bytes_per_file)
            .read_to_end(&mut piece)
            .map_err(|e| Error::io(path, e))?;
        if read == 0 {
            break;
        }

        let output = lettered_output(stem, outputs.len())?;
        let mut writer = create(&output)?;
        writer
            .write_all(&piece)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(&output, e))?;
        outputs.push(output);
    }

    Ok(outputs)
}
