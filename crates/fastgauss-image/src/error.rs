/// An error type for the image and filtering operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has no pixels.
    #[error("Image size must be at least 1x1, got {0}x{1}")]
    ZeroSizedImage(usize, usize),

    /// Error when a flat buffer cannot be split into rows of the given width.
    #[error("Data length ({0}) is not a multiple of width ({1}) times channels ({2})")]
    DataNotDivisibleByWidth(usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the pixel coordinate is out of bounds.
    #[error("Pixel coordinate ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the number of planes does not match the number of channels.
    #[error("Got {0} planes but the image has {1} channels")]
    ChannelCountMismatch(usize, usize),

    /// Error when the planes to combine do not share the same size.
    #[error("Plane {0} has size {1} but expected {2}")]
    PlaneSizeMismatch(usize, crate::ImageSize, crate::ImageSize),

    /// Error when two images are expected to have the same size.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the per axis kernel lists have different lengths.
    #[error("Invalid kernel length: {0} and {1}")]
    InvalidKernelLength(usize, usize),

    /// Error when the standard deviation is not a finite positive number.
    #[error("Sigma must be finite and greater than zero, got {0}")]
    InvalidSigma(f32),

    /// Error when the number of box filter passes is zero.
    #[error("Number of box filter passes must be greater than zero, got {0}")]
    InvalidPassCount(usize),

    /// Error when the work could not be dispatched to the worker threads.
    #[error("Parallel execution failed: {0}")]
    ParallelExecution(String),
}
