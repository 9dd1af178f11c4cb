//! Uniform histogram binning for benchmark samples.

use ndarray::ArrayView1;
use serde::Serialize;

/// Binned sample counts plus the `bins + 1` edge values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub counts: Vec<usize>,
    pub bin_edges: Vec<f64>,
}

/// Bin `values` into `bins` uniform intervals spanning `[min, max]`.
///
/// Every bin is half-open except the last, which also includes the upper
/// edge. When all samples are equal the range expands to `[v - 0.5, v + 0.5]`
/// so the counts stay meaningful. Empty input or `bins == 0` yields an empty
/// histogram. Samples are assumed finite.
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    if values.is_empty() || bins == 0 {
        return Histogram {
            counts: Vec::new(),
            bin_edges: Vec::new(),
        };
    }

    let samples = ArrayView1::from(values);
    let mut lo = samples.fold(f64::INFINITY, |acc, &v| acc.min(v));
    let mut hi = samples.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let bin_edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &v in samples.iter() {
        // The upper edge belongs to the last bin.
        let idx = if v >= hi {
            bins - 1
        } else {
            (((v - lo) / width) as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }

    Histogram { counts, bin_edges }
}
