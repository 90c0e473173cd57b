//! Pixel-statistics engines.
//!
//! Data flows leaf-first: [`luminance`] builds the buffer, [`Histogram`]
//! counts it, [`Statistics`] summarizes the counts and [`EqualizationLut`]
//! remaps the buffer from the cumulative distribution.

mod equalize;
mod histogram;
mod luminance;
mod statistics;

pub use equalize::{equalize, EqualizationLut};
pub use histogram::{Histogram, BINS};
pub use luminance::luminance;
pub use statistics::Statistics;
