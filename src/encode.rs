use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{DynamicImage, ImageFormat};

use crate::{bs_err, bs_try, error::ScaleError};

/// Writes the image as an 8-bit RGB BMP file.
/// Alpha is dropped and deeper channels are narrowed before encoding,
/// since the BMP encoder does not accept every pixel layout a decoder can produce.
pub fn write_bmp(image: &DynamicImage, path: &Path) -> Result<(), ScaleError> {
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| bs_err!("unable to open image '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match image.as_rgb8() {
        Some(pixels) => bs_try!(pixels.write_to(&mut writer, ImageFormat::Bmp)),
        None => bs_try!(image.to_rgb8().write_to(&mut writer, ImageFormat::Bmp)),
    }

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    bs_try!(writer.flush());

    Ok(())
}
