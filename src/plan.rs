use std::path::PathBuf;

use crate::{decode::decode, encode, error::ScaleError, filename_utils, resize, scan};

/// Directory holding the scan set to convert.
pub const SOURCE_DIR: &str = "/Volumes/HADI_256GB/ABQ1071";

/// Loose on purpose: `*g` picks up .jpg, .jpeg and .png alike.
/// Anything else ending in `g` gets picked up too and will abort the run
/// if it does not decode.
pub const NAME_PATTERN: &str = "*g";

pub const TARGET_WIDTH: u32 = 1024;
pub const TARGET_HEIGHT: u32 = 1024;

/// Number of files already converted before the first pass over the scan set
/// was interrupted; the batch restarts right after them. The offset is
/// positional over the sorted file list, so set this back to 0 before
/// pointing the tool at a different directory.
pub const RESUME_OFFSET: usize = 800;

/// Plan for one batch run: where to look, what to match, what to emit.
///
/// The defaults are the compiled-in job values; tests swap in their own
/// directories and offsets.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub source_dir: PathBuf,
    pub pattern: String,
    pub width: u32,
    pub height: u32,
    pub resume_offset: usize,
    /// Outputs go to the working directory, not back into the source set.
    pub output_dir: PathBuf,
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR),
            pattern: NAME_PATTERN.to_owned(),
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            resume_offset: RESUME_OFFSET,
            output_dir: PathBuf::from("."),
        }
    }
}

impl BatchPlan {
    /// A single linear pass: decode, resize, write, next file.
    /// The first failure aborts the run; outputs written so far stay on disk.
    pub fn execute(&self) -> Result<(), ScaleError> {
        let files = scan::find_matching_files(&self.source_dir, &self.pattern)?;
        // the one line of output on a clean run: how many files matched
        println!("{}", files.len());

        for input in files.iter().skip(self.resume_offset) {
            let mut image = decode(input)?;
            resize::resize_to_fixed(&mut image, self.width, self.height)?;
            let output = self.output_dir.join(filename_utils::bmp_file_name(input));
            encode::write_bmp(&image, &output)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_carries_the_job_values() {
        let plan = BatchPlan::default();
        assert_eq!(plan.source_dir, PathBuf::from(SOURCE_DIR));
        assert_eq!(plan.pattern, "*g");
        assert_eq!((plan.width, plan.height), (1024, 1024));
        assert_eq!(plan.resume_offset, 800);
        assert_eq!(plan.output_dir, PathBuf::from("."));
    }
}
