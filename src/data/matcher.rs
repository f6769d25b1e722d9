//! ppm matching of sample m/z values against background m/z values.
//!
//! The window is always anchored on the *sample* m/z: a sample `s` matches a
//! background `b` when `|s - b| <= s * ppm / 1e6`. The window is not symmetric
//! in `s` and `b`. Whether the background's m/z (or the midpoint) should scale
//! it instead is an open question; do not change it without settling that.

/// Default matching tolerance in ppm.
pub const DEFAULT_TOLERANCE_PPM: f64 = 5.0;

/// Half-width of the tolerance window around `mz`.
pub fn ppm_window(mz: f64, ppm: f64) -> f64 {
    mz * ppm / 1e6
}

/// Whether `sample_mz` and `background_mz` coincide within the window.
#[inline]
pub fn within_ppm(sample_mz: f64, background_mz: f64, ppm: f64) -> bool {
    (sample_mz - background_mz).abs() <= ppm_window(sample_mz, ppm)
}

/// Linear scan over the background list, stopping at the first match.
pub fn is_background(sample_mz: f64, background: &[f64], ppm: f64) -> bool {
    background
        .iter()
        .any(|&bg_mz| within_ppm(sample_mz, bg_mz, ppm))
}

// ---------------------------------------------------------------------------
// Sorted index
// ---------------------------------------------------------------------------

/// Sorted background m/z values for window lookups by binary search.
///
/// Answers exactly like [`is_background`]: the search only narrows the
/// candidates, and every candidate is still checked with [`within_ppm`].
#[derive(Debug, Clone, Default)]
pub struct BackgroundIndex {
    /// Finite values, ascending.
    sorted: Vec<f64>,
    /// Infinite values. NaN never matches anything and is dropped.
    infinite: Vec<f64>,
}

impl BackgroundIndex {
    pub fn new(background: &[f64]) -> Self {
        let (mut sorted, infinite): (Vec<f64>, Vec<f64>) = background
            .iter()
            .copied()
            .filter(|mz| !mz.is_nan())
            .partition(|mz| mz.is_finite());
        sorted.sort_by(f64::total_cmp);
        Self { sorted, infinite }
    }

    pub fn len(&self) -> usize {
        self.sorted.len() + self.infinite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any background value lies within `ppm` of `sample_mz`.
    pub fn contains_within(&self, sample_mz: f64, ppm: f64) -> bool {
        let window = ppm_window(sample_mz, ppm);
        if window.is_nan() || window < 0.0 {
            // Negative m/z, negative ppm or NaN: nothing can be that close.
            return false;
        }
        if !window.is_finite() || !sample_mz.is_finite() {
            return is_background(sample_mz, &self.sorted, ppm)
                || is_background(sample_mz, &self.infinite, ppm);
        }

        // Doubling the half-width keeps every true match inside the slice
        // despite rounding in `sample_mz - window`.
        let slack = window * 2.0;
        let lo = sample_mz - slack;
        let hi = sample_mz + slack;
        let start = self.sorted.partition_point(|&bg_mz| bg_mz < lo);
        self.sorted[start..]
            .iter()
            .take_while(|&&bg_mz| bg_mz <= hi)
            .any(|&bg_mz| within_ppm(sample_mz, bg_mz, ppm))
    }
}
