//! Paragraph splitting
//!
//! Long lines are cut into fixed windows of `max_length` characters; a
//! trailing piece shorter than `min_length` is discarded. Lengths count
//! Unicode scalar values, so a window never splits a character.

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::files::reader::LineReader;
use crate::files::writer::LineWriter;
use std::collections::HashSet;
use std::path::Path;

/// Default minimum length of a kept piece
pub const DEFAULT_MIN_LENGTH: usize = 20;

/// Default minimum length of an extracted sentence
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 5;

/// Characters that end a sentence
pub const SENTENCE_ENDINGS: [char; 4] = ['。', '？', '！', '…'];

/// Cut `content` into windows of at most `max_length` characters
///
/// - shorter than `min_length`: nothing is returned
/// - at most `max_length`: returned whole
/// - otherwise: full windows left to right, plus the tail if it has at
///   least `min_length` characters
pub fn split_by_max(content: &str, max_length: usize, min_length: usize) -> Result<Vec<String>> {
    if max_length == 0 {
        return Err(Error::validation("max_length must be greater than 0"));
    }

    // byte offset of every character, plus the end of the string
    let offsets: Vec<usize> = content
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(content.len()))
        .collect();
    let len = offsets.len() - 1;

    if len < min_length {
        return Ok(Vec::new());
    }
    if len <= max_length {
        return Ok(vec![content.to_owned()]);
    }

    // boundaries include `len` itself when it is a multiple of max_length
    let bounds: Vec<usize> = (0..=len).step_by(max_length).collect();
    let mut pieces: Vec<String> = bounds
        .windows(2)
        .map(|w| content[offsets[w[0]]..offsets[w[1]]].to_owned())
        .collect();

    let last = bounds.last().copied().unwrap_or(0);
    let tail_len = len - last;
    if tail_len > 0 && tail_len >= min_length {
        pieces.push(content[offsets[last]..].to_owned());
    }
    Ok(pieces)
}

/// Apply [`split_by_max`] to every line of `input`, writing pieces to `output`
///
/// Returns the number of lines written.
pub fn split_file_by_max_length(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    max_length: usize,
    min_length: usize,
    options: LoadOptions,
) -> Result<usize> {
    if max_length == 0 {
        return Err(Error::validation("max_length must be greater than 0"));
    }
    let mut writer = LineWriter::create(output.as_ref())?;
    for line in LineReader::open(input.as_ref(), options)? {
        let line = line?;
        for piece in split_by_max(strip_terminator(&line), max_length, min_length)? {
            writer.write_line(&piece)?;
        }
    }
    let written = writer.finish()?;
    log::info!("wrote {} lines to {}", written, output.as_ref().display());
    Ok(written)
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split a line on sentence-ending marks, dropping empty pieces
pub fn extract_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_ENDINGS.as_slice())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Collect the distinct sentences of `input` and write those longer than
/// `min_chars` characters to `output`, in order of first appearance
///
/// Returns the number of sentences written.
pub fn extract_sentence_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    min_chars: usize,
    options: LoadOptions,
) -> Result<usize> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut ordered: Vec<String> = Vec::new();

    for line in LineReader::open(input.as_ref(), options)? {
        let line = line?;
        for sentence in extract_sentences(strip_terminator(&line)) {
            if seen.insert(sentence.to_owned()) {
                ordered.push(sentence.to_owned());
            }
        }
    }
    log::info!("found {} distinct sentences", ordered.len());

    let mut writer = LineWriter::create(output.as_ref())?;
    for sentence in ordered.iter().filter(|s| s.chars().count() > min_chars) {
        writer.write_line(sentence)?;
    }
    writer.finish()
}
