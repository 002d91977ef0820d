use std::path::{Path, PathBuf};

use crate::{bs_err, bs_try, error::ScaleError};

/// Returns the regular files in `dir` whose names match `pattern`,
/// sorted lexicographically by path.
///
/// The order matters: the batch resume offset is positional, so enumeration
/// must be stable across runs and platforms.
pub fn find_matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, ScaleError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|error| bs_err!("unable to read directory '{}': {error}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = bs_try!(entry);
        if !name_matches(entry.file_name().as_encoded_bytes(), pattern.as_bytes()) {
            continue;
        }
        let path = entry.path();
        // follows symlinks, so a link to a regular file counts as one
        let metadata = bs_try!(std::fs::metadata(&path));
        if metadata.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Shell-style name matching: `*` matches any sequence of characters
/// (including none), `?` matches exactly one. Matching is byte-wise and
/// case-sensitive. Names starting with `.` are only matched by patterns
/// that spell out the leading dot, as is conventional for globbing.
pub fn name_matches(name: &[u8], pattern: &[u8]) -> bool {
    if name.first() == Some(&b'.') && pattern.first() != Some(&b'.') {
        return false;
    }
    wildcard_match(name, pattern)
}

fn wildcard_match(name: &[u8], pattern: &[u8]) -> bool {
    let mut n = 0;
    let mut p = 0;
    // position to restart from when a `*` has to swallow one more character
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == name[n]) {
            n += 1;
            p += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            star = Some((p, n));
            p += 1;
        } else if let Some((star_p, star_n)) = star {
            p = star_p + 1;
            n = star_n + 1;
            star = Some((star_p, star_n + 1));
        } else {
            return false;
        }
    }
    // trailing stars match the empty remainder
    while p < pattern.len() && pattern[p] == b'*' {
        p += 1;
    }
    p == pattern.len()
}
