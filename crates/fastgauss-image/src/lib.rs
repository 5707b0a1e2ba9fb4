#![deny(missing_docs)]
//! Pixel buffer types and channel planes for the fastgauss blur

/// image representation and channel splitting.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
