use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::{bs_err, error::ScaleError};

/// Guesses the format from file contents, never from the extension.
/// The name pattern used for enumeration is loose enough to let mislabeled
/// and extension-less files through, and sniffing handles those correctly.
pub fn decode(file: &Path) -> Result<DynamicImage, ScaleError> {
    let reader = ImageReader::open(file)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|error| bs_err!("unable to open image '{}': {error}", file.display()))?;
    reader
        .decode()
        .map_err(|error| bs_err!("unable to decode image '{}': {error}", file.display()))
}
