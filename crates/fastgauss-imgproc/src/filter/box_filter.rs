use fastgauss_image::{Image, ImageError};

/// Average one line of samples over a window of `2 * radius + 1` using a running sum.
///
/// The line is read from `src` at `start, start + stride, ...` for `len` samples
/// and written to the same positions in `dst`. Samples outside of the line are
/// replaced by the first or last sample (clamp to edge).
fn box_filter_line(
    src: &[u8],
    dst: &mut [u8],
    start: usize,
    stride: usize,
    len: usize,
    radius: usize,
) {
    // u128 holds 255 * (2 * usize::MAX + 1) so any radius is exact
    let at = |i: usize| src[start + i * stride] as u128;

    let first = at(0);
    let last = at(len - 1);
    let kernel_size = 2 * radius as u128 + 1;
    let half_kernel = radius as u128;

    // seed the window centered on the first sample
    let inside = radius.min(len - 1);
    let mut acc = first * (radius as u128 + 1);
    acc += (1..=inside).map(at).sum::<u128>();
    acc += last * (radius - inside) as u128;
    dst[start] = ((acc + half_kernel) / kernel_size) as u8;

    for i in 1..len {
        // the outgoing sample is clamped to the first one while the window
        // straddles the left edge
        acc -= match i.checked_sub(radius).and_then(|j| j.checked_sub(1)) {
            Some(j) => at(j),
            None => first,
        };

        // the incoming sample is clamped to the last one while the window
        // straddles the right edge
        acc += match i.checked_add(radius) {
            Some(j) if j < len => at(j),
            _ => last,
        };

        dst[start + i * stride] = ((acc + half_kernel) / kernel_size) as u8;
    }
}

fn check_same_size(src: &Image<u8, 1>, dst: &Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Apply a box filter along the rows of a plane.
///
/// # Arguments
///
/// * `src` - The source plane with shape (H, W).
/// * `dst` - The destination plane with shape (H, W).
/// * `radius` - Half of the kernel size. The total size is `2 * radius + 1`.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn fast_horizontal_filter(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    radius: usize,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let cols = src.cols();
    if radius == 0 || src.size().is_empty() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    src.as_slice()
        .chunks_exact(cols)
        .zip(dst.as_slice_mut().chunks_exact_mut(cols))
        .for_each(|(src_row, dst_row)| box_filter_line(src_row, dst_row, 0, 1, cols, radius));

    Ok(())
}

/// Apply a box filter along the columns of a plane.
///
/// # Arguments
///
/// * `src` - The source plane with shape (H, W).
/// * `dst` - The destination plane with shape (H, W).
/// * `radius` - Half of the kernel size. The total size is `2 * radius + 1`.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn fast_vertical_filter(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    radius: usize,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    if radius == 0 || src.size().is_empty() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let (rows, cols) = (src.rows(), src.cols());
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();
    for c in 0..cols {
        box_filter_line(src_data, dst_data, c, cols, rows, radius);
    }

    Ok(())
}

/// Blur a plane in place with a 2D box filter of the given radius.
///
/// Runs the horizontal pass into `scratch` and the vertical pass back into
/// `plane`, so repeated calls do not allocate.
///
/// # Arguments
///
/// * `plane` - The plane to blur, overwritten with the result.
/// * `scratch` - A buffer with the same shape as `plane`.
/// * `radius` - Half of the kernel size. The total size is `2 * radius + 1`.
pub fn box_blur_fast_plane(
    plane: &mut Image<u8, 1>,
    scratch: &mut Image<u8, 1>,
    radius: usize,
) -> Result<(), ImageError> {
    box_blur_fast_plane_xy(plane, scratch, (radius, radius))
}

/// Same as [`box_blur_fast_plane`] with a different radius per axis, xy-ordered.
pub fn box_blur_fast_plane_xy(
    plane: &mut Image<u8, 1>,
    scratch: &mut Image<u8, 1>,
    radius: (usize, usize),
) -> Result<(), ImageError> {
    check_same_size(plane, scratch)?;

    if radius == (0, 0) {
        return Ok(());
    }

    fast_horizontal_filter(plane, scratch, radius.0)?;
    fast_vertical_filter(scratch, plane, radius.1)?;

    Ok(())
}
