use fastgauss_image::{Image, ImageError};

use super::{box_blur_fast_plane_xy, kernels};
use crate::parallel::{par_map_channels, ExecutionStrategy};

/// Number of box filter passes used to approximate a gaussian.
pub const DEFAULT_BOX_PASSES: usize = 3;

/// Parameters of the fast gaussian blur.
///
/// # Examples
///
/// ```
/// use fastgauss_imgproc::filter::FastGaussianBlurConfig;
/// use fastgauss_imgproc::parallel::ExecutionStrategy;
///
/// let config = FastGaussianBlurConfig::new(2.0)
///     .with_passes(4)
///     .with_strategy(ExecutionStrategy::Serial);
///
/// assert_eq!(config.sigma, (2.0, 2.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FastGaussianBlurConfig {
    /// The standard deviation of the gaussian, xy-ordered.
    pub sigma: (f32, f32),
    /// The number of box filter passes per axis.
    pub passes: usize,
    /// How the channel planes are dispatched.
    pub strategy: ExecutionStrategy,
}

impl FastGaussianBlurConfig {
    /// Create a config with the same sigma on both axes and default settings.
    pub fn new(sigma: f32) -> Self {
        Self {
            sigma: (sigma, sigma),
            passes: DEFAULT_BOX_PASSES,
            strategy: ExecutionStrategy::default(),
        }
    }

    /// Set a different sigma per axis, xy-ordered.
    pub fn with_sigma_xy(mut self, sigma_x: f32, sigma_y: f32) -> Self {
        self.sigma = (sigma_x, sigma_y);
        self
    }

    /// Set the number of box filter passes.
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check the parameters without running the blur.
    pub fn validate(&self) -> Result<(), ImageError> {
        self.radii().map(|_| ())
    }

    /// Plan the per pass radii for both axes.
    fn radii(&self) -> Result<(Vec<usize>, Vec<usize>), ImageError> {
        let radii_x = kernels::box_blur_fast_kernels_1d(self.sigma.0, self.passes)?;
        let radii_y = kernels::box_blur_fast_kernels_1d(self.sigma.1, self.passes)?;
        if let ExecutionStrategy::Fixed(0) = self.strategy {
            return Err(crate::parallel::ParallelError::InvalidThreadCount(0).into());
        }
        Ok((radii_x, radii_y))
    }
}

/// Run a cascade of 2D box blurs on a single plane.
///
/// Pass `i` uses `radii_x[i]` along the rows and `radii_y[i]` along the
/// columns; every pass consumes the output of the previous one.
///
/// # Arguments
///
/// * `src` - The source plane with shape (H, W). It is not modified.
/// * `radii_x` - The horizontal radius of every pass.
/// * `radii_y` - The vertical radius of every pass.
///
/// # Returns
///
/// A new plane with the same shape as `src`.
pub fn box_blur_fast_cascade(
    src: &Image<u8, 1>,
    radii_x: &[usize],
    radii_y: &[usize],
) -> Result<Image<u8, 1>, ImageError> {
    if radii_x.len() != radii_y.len() {
        return Err(ImageError::InvalidKernelLength(radii_x.len(), radii_y.len()));
    }

    let mut plane = src.clone();
    let mut scratch = Image::<u8, 1>::from_size_val(src.size(), 0)?;

    for (pass, (&radius_x, &radius_y)) in radii_x.iter().zip(radii_y.iter()).enumerate() {
        log::trace!("box pass {pass}: radius ({radius_x}, {radius_y})");
        box_blur_fast_plane_xy(&mut plane, &mut scratch, (radius_x, radius_y))?;
    }

    Ok(plane)
}

/// Blur an image with a fast approximation of a gaussian blur.
///
/// Every channel is blurred independently with three box filter passes whose
/// widths are planned from `sigma`. Borders are handled by clamping to the
/// nearest edge pixel.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C), usually RGBA.
/// * `sigma` - The standard deviation of the gaussian.
///
/// # Returns
///
/// A new image with the same shape as `src`.
///
/// # Errors
///
/// Fails if the image is empty or if `sigma` is not finite and positive.
///
/// # Examples
///
/// ```
/// use fastgauss_image::{Image, ImageSize};
/// use fastgauss_imgproc::filter::gaussian_blur_fast;
///
/// let size = ImageSize { width: 8, height: 6 };
/// let image = Image::<u8, 4>::from_size_val(size, 200).unwrap();
///
/// let blurred = gaussian_blur_fast(&image, 2.0).unwrap();
/// assert_eq!(blurred, image);
/// ```
pub fn gaussian_blur_fast<const C: usize>(
    src: &Image<u8, C>,
    sigma: f32,
) -> Result<Image<u8, C>, ImageError> {
    gaussian_blur_fast_with(src, &FastGaussianBlurConfig::new(sigma))
}

/// Blur an image with a fast approximation of a gaussian blur.
///
/// Same as [`gaussian_blur_fast`] with full control over the parameters.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `config` - The blur parameters.
pub fn gaussian_blur_fast_with<const C: usize>(
    src: &Image<u8, C>,
    config: &FastGaussianBlurConfig,
) -> Result<Image<u8, C>, ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::ZeroSizedImage(src.width(), src.height()));
    }

    let (radii_x, radii_y) = config.radii()?;
    log::debug!(
        "gaussian_blur_fast: size {}, sigma {:?}, radii x {:?}, radii y {:?}",
        src.size(),
        config.sigma,
        radii_x,
        radii_y
    );

    let planes = src.split_channels();
    let blurred = par_map_channels(&planes, config.strategy, |plane| {
        box_blur_fast_cascade(plane, &radii_x, &radii_y)
    })?;

    Image::from_channels(&blurred)
}
