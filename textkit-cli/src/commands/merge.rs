//! Merge command implementation

use super::Context;
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;
use textkit_core::files::merge_directory_with;

/// Arguments for the merge command
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Directory whose files are concatenated
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Include files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,
}

impl MergeArgs {
    /// Execute the merge command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init_spinner(&format!("Merging {}", self.dir.display()));

        let stats = merge_directory_with(
            &self.dir,
            &self.output,
            self.recursive,
            ctx.load,
            |path, _| progress.item_completed(&path.display().to_string()),
        )
        .with_context(|| format!("Failed to merge {}", self.dir.display()))?;
        progress.finish();

        println!(
            "Merged {} files ({} lines) into {}",
            stats.files,
            stats.lines,
            self.output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_merge_execute() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.txt"), "一\n").unwrap();
        fs::write(src.join("nested/b.txt"), "二\n").unwrap();
        let output = dir.path().join("all.txt");

        let args = MergeArgs {
            dir: src,
            output: output.clone(),
            recursive: true,
        };
        args.execute(&Context::default()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "一\n二\n");
    }
}
