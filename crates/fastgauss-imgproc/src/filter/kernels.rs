use fastgauss_image::ImageError;

/// Largest box width the planner hands out.
///
/// Keeps `width + 2` and `2 * radius + 1` representable for any sigma.
pub const MAX_BOX_WIDTH: usize = usize::MAX / 4;

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn box_blur_kernel_1d(kernel_size: usize) -> Vec<f32> {
    vec![1.0 / kernel_size as f32; kernel_size]
}

/// Plan the widths of a cascade of box filters approximating a gaussian.
///
/// Mixes two adjacent odd widths, a narrow `wl` and a wide `wl + 2`, so that the
/// summed variance of the `passes` boxes matches `sigma * sigma`.
///
/// # Arguments
///
/// * `sigma` - The standard deviation of the target gaussian.
/// * `passes` - The number of box filters in the cascade.
///
/// # Returns
///
/// `passes` odd widths, the narrow ones first.
///
/// # Errors
///
/// Fails if `sigma` is not finite and positive or if `passes` is zero.
///
/// # Examples
///
/// ```
/// use fastgauss_imgproc::filter::kernels::box_blur_fast_widths_1d;
///
/// let widths = box_blur_fast_widths_1d(2.0, 3).unwrap();
/// assert_eq!(widths, vec![3, 3, 5]);
/// ```
pub fn box_blur_fast_widths_1d(sigma: f32, passes: usize) -> Result<Vec<usize>, ImageError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageError::InvalidSigma(sigma));
    }
    if passes == 0 {
        return Err(ImageError::InvalidPassCount(passes));
    }

    let n = passes as f64;
    let sigma_sq = sigma as f64 * sigma as f64;

    let w_ideal = (12.0 * sigma_sq / n + 1.0).sqrt();

    // the narrow width must be odd, at least 1 (radius 0) and leave room for
    // the wide width below MAX_BOX_WIDTH
    let mut wl = (w_ideal.floor() as usize).clamp(1, MAX_BOX_WIDTH - 2);
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wu = wl + 2;

    let wl_f = wl as f64;
    let m_ideal =
        (12.0 * sigma_sq - n * wl_f * wl_f - 4.0 * n * wl_f - 3.0 * n) / (-4.0 * wl_f - 4.0);
    let m = m_ideal.round().clamp(0.0, n) as usize;

    Ok((0..passes).map(|i| if i < m { wl } else { wu }).collect())
}

/// Plan the half sizes (radii) of a cascade of box filters approximating a gaussian.
///
/// Each radius is `(width - 1) / 2` of the corresponding width returned by
/// [`box_blur_fast_widths_1d`].
///
/// # Arguments
///
/// * `sigma` - The standard deviation of the target gaussian.
/// * `passes` - The number of box filters in the cascade.
pub fn box_blur_fast_kernels_1d(sigma: f32, passes: usize) -> Result<Vec<usize>, ImageError> {
    let widths = box_blur_fast_widths_1d(sigma, passes)?;
    Ok(widths.into_iter().map(|w| (w - 1) / 2).collect())
}
