//! Concatenating every file under a directory

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::files::reader::load_to_list;
use crate::files::writer::LineWriter;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Summary of a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Source files read
    pub files: usize,
    /// Lines written to the output
    pub lines: usize,
}

/// Merge every regular file under `base_dir` into `output`
///
/// With `recursive` all descendants are visited; otherwise only the files
/// directly inside `base_dir`. Files are visited in file-name order within
/// each directory.
pub fn merge_directory(
    base_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    recursive: bool,
    options: LoadOptions,
) -> Result<MergeStats> {
    merge_directory_with(base_dir, output, recursive, options, |_, _| {})
}

/// Like [`merge_directory`], calling `on_file(path, lines)` after each source file
pub fn merge_directory_with<F>(
    base_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    recursive: bool,
    options: LoadOptions,
    mut on_file: F,
) -> Result<MergeStats>
where
    F: FnMut(&Path, usize),
{
    let base_dir = base_dir.as_ref();
    let output = output.as_ref();
    if !base_dir.is_dir() {
        return Err(Error::validation(format!(
            "{} is not a directory",
            base_dir.display()
        )));
    }

    let mut writer = LineWriter::create(output)?;
    let output_canonical = fs::canonicalize(output).map_err(|e| Error::io(output, e))?;

    let mut walker = WalkDir::new(base_dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut stats = MergeStats::default();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(base_dir).to_path_buf();
            Error::io(&path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if fs::canonicalize(path).is_ok_and(|p| p == output_canonical) {
            log::debug!("skipping merge output {}", path.display());
            continue;
        }

        let lines = load_to_list(path, options)?;
        for line in &lines {
            writer.write_line(line)?;
        }
        stats.files += 1;
        stats.lines += lines.len();
        log::info!("merged {} ({} lines)", path.display(), lines.len());
        on_file(path, lines.len());
    }

    writer.finish()?;
    Ok(stats)
}
