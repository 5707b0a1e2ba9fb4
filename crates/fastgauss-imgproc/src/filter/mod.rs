//! Filter operations
//!
//! This module provides the sliding window box filters and the fast gaussian
//! blur built on top of them.

/// Filter kernels and box width planning
pub mod kernels;

/// Fast gaussian blur operations
mod ops;
pub use ops::*;

/// Sliding window box filter operations
mod box_filter;
pub use box_filter::*;
