//! 256-bin luminance histogram.

use crate::domain::LumaBuffer;

/// Number of histogram bins, one per 8-bit luminance value.
pub const BINS: usize = 256;

/// 256-bin histogram of luminance values.
///
/// Recomputed from scratch whenever the underlying buffer changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; BINS],
    total: u64,
}

impl Histogram {
    /// Counts raw luminance values.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Self {
        let mut bins = [0u64; BINS];
        for &v in values {
            bins[usize::from(v)] += 1;
        }
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// Counts every value of a luminance buffer.
    #[must_use]
    pub fn from_buffer(buffer: &LumaBuffer) -> Self {
        Self::from_values(buffer.as_slice())
    }

    /// Builds a histogram from explicit counts.
    #[must_use]
    pub fn from_bins(bins: [u64; BINS]) -> Self {
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// All bin counts, indexed by luminance.
    #[must_use]
    pub const fn bins(&self) -> &[u64; BINS] {
        &self.bins
    }

    /// Count for one luminance value.
    #[must_use]
    pub fn count(&self, value: u8) -> u64 {
        self.bins[usize::from(value)]
    }

    /// Sum of all counts.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Largest single bin count.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Lowest luminance with a non-zero count.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn first_non_empty(&self) -> Option<u8> {
        // Safe: position is always a bin index below 256
        self.bins.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Running sum of counts: `cdf[i] = bins[0] + ... + bins[i]`.
    #[must_use]
    pub fn cumulative(&self) -> [u64; BINS] {
        let mut cdf = [0u64; BINS];
        let mut running = 0u64;
        for (slot, &count) in cdf.iter_mut().zip(self.bins.iter()) {
            running += count;
            *slot = running;
        }
        cdf
    }
}
