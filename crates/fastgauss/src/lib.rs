#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use fastgauss_image as image;

#[doc(inline)]
pub use fastgauss_imgproc as imgproc;

use fastgauss_image::{Image, ImageError};

/// Blur an RGBA bitmap with a fast approximation of a gaussian blur.
///
/// Shorthand for [`imgproc::filter::gaussian_blur_fast`] on four channel
/// images. The input is not modified.
///
/// # Arguments
///
/// * `bitmap` - The RGBA source image.
/// * `sigma` - The standard deviation of the gaussian, strictly positive.
pub fn blur(bitmap: &Image<u8, 4>, sigma: f32) -> Result<Image<u8, 4>, ImageError> {
    imgproc::filter::gaussian_blur_fast(bitmap, sigma)
}
