// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fold parameters and their validation.

use core::fmt;

/// Axis along which the container is sliced into fold segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Segments are vertical strips; the fold runs left to right.
    Horizontal,
    /// Segments are horizontal strips; the fold runs top to bottom.
    #[default]
    Vertical,
}

impl Orientation {
    /// Does the fold axis run left to right?
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Validated fold parameters.
///
/// The anchor factor is the fraction of the container's fold-axis extent
/// at which the crease pattern is pinned. It may lie outside `[0, 1]`;
/// anchoring past the container edge sweeps the whole zig-zag to one
/// side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldConfig {
    /// Fold axis.
    pub orientation: Orientation,
    /// Crease anchor as a fraction of the fold-axis extent.
    pub anchor_factor: f64,
    /// Number of segments; must be at least 1.
    pub fold_count: u32,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            anchor_factor: 2.2,
            fold_count: 2,
        }
    }
}

impl FoldConfig {
    /// Checks the configuration for values that would poison the solver.
    ///
    /// A zero fold count would divide the axis by zero; a non-finite
    /// anchor factor would produce NaN destination quads. Both fail here
    /// rather than at solve time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fold_count < 1 {
            return Err(ConfigError::ZeroFoldCount);
        }
        if !self.anchor_factor.is_finite() {
            return Err(ConfigError::NonFiniteAnchor);
        }
        Ok(())
    }
}

/// A rejected fold configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The fold count was zero.
    ZeroFoldCount,
    /// The anchor factor was NaN or infinite.
    NonFiniteAnchor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFoldCount => write!(f, "fold count must be at least 1"),
            Self::NonFiniteAnchor => write!(f, "anchor factor must be finite"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Pixel extent of the container being folded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Creates an extent.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the extent along the fold axis.
    #[inline]
    #[must_use]
    pub fn along(self, orientation: Orientation) -> f64 {
        if orientation.is_horizontal() {
            f64::from(self.width)
        } else {
            f64::from(self.height)
        }
    }

    /// Returns the extent across the fold axis.
    #[inline]
    #[must_use]
    pub fn across(self, orientation: Orientation) -> f64 {
        if orientation.is_horizontal() {
            f64::from(self.height)
        } else {
            f64::from(self.width)
        }
    }
}
