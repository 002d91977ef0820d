use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Derives the output file name: the input's base name with the extension
/// replaced by `.bmp`. Directory components are dropped entirely, so the
/// caller decides which directory the result lands in.
/// A name with no extension gets `.bmp` appended to the whole name.
pub fn bmp_file_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new(""));
    let mut name = stem.to_os_string();
    name.push(".bmp");
    PathBuf::from(name)
}
