use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

use crate::{bs_err, error::ScaleError};

/// Resamples the image to exactly `dst_width` x `dst_height`.
/// Aspect ratio is not preserved; smaller inputs get stretched up.
///
/// Box filtering averages all source pixels covered by each destination
/// pixel, which keeps downscaled scans free of aliasing artifacts.
pub fn resize_to_fixed(
    image: &mut DynamicImage,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), ScaleError> {
    if image.width() == dst_width && image.height() == dst_height {
        return Ok(());
    }
    let mut resizer = Resizer::new(); // TODO: cache the resizer across the batch
    let mut dst_image = DynamicImage::new(dst_width, dst_height, image.color());
    let options = ResizeOptions::default().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    resizer
        .resize(image, &mut dst_image, Some(&options))
        .map_err(|error| bs_err!(error))?;
    *image = dst_image;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use quickcheck_macros::quickcheck;
    use std::num::NonZeroU8;

    #[quickcheck]
    // u8::MAX * u8::MAX is a large enough space for
    // quickcheck to explore and verify and still runs quickly
    fn any_input_size_hits_the_target(width: NonZeroU8, height: NonZeroU8) {
        let mut image = DynamicImage::new_rgb8(width.get() as u32, height.get() as u32);
        resize_to_fixed(&mut image, 16, 16).unwrap();
        assert_eq!((image.width(), image.height()), (16, 16));
    }

    #[test]
    fn upscale_stretches() {
        let mut image = DynamicImage::new_rgb8(4, 2);
        resize_to_fixed(&mut image, 32, 32).unwrap();
        assert_eq!((image.width(), image.height()), (32, 32));
    }

    #[test]
    fn matching_size_is_left_untouched() {
        let mut pixels = RgbImage::new(16, 16);
        pixels.put_pixel(3, 5, Rgb([10, 20, 30]));
        let mut image = DynamicImage::ImageRgb8(pixels.clone());
        resize_to_fixed(&mut image, 16, 16).unwrap();
        assert_eq!(image.as_rgb8().unwrap(), &pixels);
    }

    #[test]
    fn downscale_averages_pixel_blocks() {
        // a 2x2 checkerboard averaged down to a single pixel lands mid-gray
        let mut pixels = RgbImage::new(2, 2);
        pixels.put_pixel(0, 0, Rgb([255, 255, 255]));
        pixels.put_pixel(1, 1, Rgb([255, 255, 255]));
        let mut image = DynamicImage::ImageRgb8(pixels);
        resize_to_fixed(&mut image, 1, 1).unwrap();
        let pixel = image.as_rgb8().unwrap().get_pixel(0, 0);
        for channel in pixel.0 {
            assert!((126..=129).contains(&channel), "got {channel}");
        }
    }
}
