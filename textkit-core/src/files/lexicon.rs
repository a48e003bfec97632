//! Weighted-term and word-vector tables

use crate::config::{LoadOptions, MalformedLines};
use crate::error::{Error, Result};
use crate::files::reader::LineReader;
use std::collections::HashMap;
use std::path::Path;

/// Term to weight (for example IDF) mapping
pub type TermWeights = HashMap<String, f64>;

/// Term to fixed-dimension vector mapping
pub type TermVectors = HashMap<String, Vec<f32>>;

/// Load a `term weight` table
///
/// Blank lines are skipped. Any other line must hold exactly two
/// whitespace-separated fields, the second a number. Later duplicates
/// overwrite earlier ones.
pub fn load_idf(path: impl AsRef<Path>, options: LoadOptions) -> Result<TermWeights> {
    let path = path.as_ref();
    let mut weights = TermWeights::new();
    let mut reader = LineReader::open(path, options)?;

    while let Some(line) = reader.next() {
        let line = line?;
        let line_no = reader.line_no();
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let [term, weight] = fields.as_slice() else {
            return Err(Error::parse(
                path,
                line_no,
                format!("expected 'term weight', found {} fields", fields.len()),
            ));
        };
        let weight: f64 = weight
            .parse()
            .map_err(|e| Error::parse(path, line_no, format!("invalid weight '{weight}': {e}")))?;
        weights.insert((*term).to_string(), weight);
    }

    log::info!("loaded {} term weights from {}", weights.len(), path.display());
    Ok(weights)
}

/// Load a word-vector text file
///
/// The first line is a header and is ignored. Each data line is a term, a
/// single space, then `dim` space-separated numbers. A line missing either
/// part is skipped or rejected according to `options.malformed`; a vector of
/// the wrong length always aborts the load.
pub fn load_word2vec(
    path: impl AsRef<Path>,
    dim: usize,
    options: LoadOptions,
) -> Result<TermVectors> {
    let path = path.as_ref();
    let mut vectors = TermVectors::new();
    let mut reader = LineReader::open(path, options)?;

    // header: "<count> <dim>" in the usual format, never validated
    if let Some(header) = reader.next() {
        header?;
    }

    while let Some(line) = reader.next() {
        let line = line?;
        let line_no = reader.line_no();

        let Some((term, values)) = line.trim().split_once(' ') else {
            match options.malformed {
                MalformedLines::Skip => {
                    log::warn!(
                        "skipping malformed vector line {} in {}",
                        line_no,
                        path.display()
                    );
                    continue;
                }
                MalformedLines::Fail => {
                    return Err(Error::parse(path, line_no, "expected 'term v1 v2 ...'"));
                }
            }
        };

        let vector = values
            .split_whitespace()
            .map(|v| {
                v.parse::<f32>().map_err(|e| {
                    Error::parse(path, line_no, format!("invalid component '{v}': {e}"))
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        if vector.len() != dim {
            return Err(Error::DimensionMismatch {
                term: term.to_string(),
                expected: dim,
                found: vector.len(),
            });
        }
        vectors.insert(term.to_string(), vector);
    }

    log::info!(
        "loaded {} vectors of dimension {} from {}",
        vectors.len(),
        dim,
        path.display()
    );
    Ok(vectors)
}
