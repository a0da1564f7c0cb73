//! Fixed-range integer histogram with the flatness checks used by
//! Wang–Landau sampling.

use std::io::{self, Write};

use ldev_core::errors::ErrorInfo;
use ldev_core::LdevError;

/// Histogram over the values `1..=S`: bin `b` counts observations of `b+1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<u64>,
    counts: u64,
}

impl Histogram {
    /// Creates an empty histogram over `1..=size`.
    pub fn new(size: usize) -> Self {
        Self {
            bins: vec![0; size],
            counts: 0,
        }
    }

    /// Number of bins `S`.
    pub fn size(&self) -> usize {
        self.bins.len()
    }

    /// Total number of increments `N` since the last reset.
    pub fn counts(&self) -> u64 {
        self.counts
    }

    /// Count stored for `value`.
    pub fn bin(&self, value: usize) -> u64 {
        self.bins[value - 1]
    }

    /// Counts one observation of `value`.
    ///
    /// Fails with a `Range` error when `value` lies outside `[1, S]`.
    pub fn increment(&mut self, value: usize) -> Result<(), LdevError> {
        if value < 1 || value > self.bins.len() {
            return Err(LdevError::Range(
                ErrorInfo::new(
                    "value-out-of-range",
                    "histogram increment outside the supported range",
                )
                .with_context("value", value.to_string())
                .with_context("size", self.bins.len().to_string()),
            ));
        }
        self.bins[value - 1] += 1;
        self.counts += 1;
        Ok(())
    }

    /// Zeroes all bins and the total count.
    pub fn reset(&mut self) {
        self.bins.fill(0);
        self.counts = 0;
    }

    /// True iff every bin for values in `[lower, upper]` is positive.
    pub fn all_bins_nonzero(&self, lower: usize, upper: usize) -> bool {
        self.bins[(lower - 1)..upper].iter().all(|&count| count > 0)
    }

    /// Smallest bin count for values in `[lower, upper]`.
    pub fn min_bin(&self, lower: usize, upper: usize) -> u64 {
        let mut smallest = self.bins[lower - 1];
        for &count in &self.bins[(lower - 1)..upper] {
            if count < smallest {
                smallest = count;
            }
        }
        smallest
    }

    /// Flatness criterion from the Wang–Landau literature: the smallest bin
    /// in the window must exceed `epsilon` times the mean height `N / S`.
    /// The denominator is the full histogram length `S`, not the window
    /// width, matching the published behaviour this sampler is validated
    /// against.
    pub fn flat_enough(&self, epsilon: f64, lower: usize, upper: usize) -> bool {
        self.min_bin(lower, upper) as f64
            > self.counts as f64 / self.bins.len() as f64 * epsilon
    }

    /// Writes the non-zero bins as `value count err` rows, where `err` is
    /// the binomial standard error `sqrt(p(1-p)/(N-1))` with `p` the bin's
    /// relative frequency.
    pub fn write_dat<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (index, &count) in self.bins.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let p = count as f64 / self.counts as f64;
            let err = (p * (1.0 - p) / (self.counts as f64 - 1.0)).sqrt();
            writeln!(writer, "{} {} {}", index + 1, count, err)?;
        }
        Ok(())
    }
}
