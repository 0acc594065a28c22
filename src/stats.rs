//! Aggregate statistics behind the charts: means, quantiles, `describe`,
//! value counts, histogram binning, kernel density and box summaries.
//!
//! Every function skips non-finite values, so missing cells never poison an
//! aggregate.

use serde::{Deserialize, Serialize};

/// Finite values, in input order.
pub fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted = finite(values);
    sorted.sort_by(f64::total_cmp);
    sorted
}

pub fn mean(values: &[f64]) -> Option<f64> {
    let xs = finite(values);
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let xs = finite(values);
    if xs.len() < 2 {
        return None;
    }
    let m = xs.iter().sum::<f64>() / xs.len() as f64;
    let var = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (xs.len() - 1) as f64;
    Some(var.sqrt())
}

/// Quantile of already sorted values with linear interpolation between
/// the closest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted_finite(values), q)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

pub fn describe_numeric(values: &[f64]) -> NumericSummary {
    let sorted = sorted_finite(values);
    NumericSummary {
        count: sorted.len(),
        mean: mean(&sorted),
        std: std_dev(&sorted),
        min: sorted.first().copied(),
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

pub fn describe_categorical<'a>(values: impl IntoIterator<Item = &'a str>) -> CategoricalSummary {
    let counts = value_counts(values);
    let count = counts.iter().map(|(_, n)| n).sum();
    let (top, freq) = counts
        .first()
        .map(|(label, n)| (Some(label.clone()), *n))
        .unwrap_or((None, 0));

    CategoricalSummary {
        count,
        unique: counts.len(),
        top,
        freq,
    }
}

/// Occurrences of each distinct non-empty value, most frequent first.
/// Ties keep the order in which values were first seen.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for v in values {
        if v.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(label, _)| label == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Mean of `y` for each distinct `x`, ordered by `x`. Pairs with a
/// non-finite member are skipped.
pub fn mean_by(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    let mut pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut out: Vec<(f64, f64)> = Vec::new();
    let mut i = 0;
    while i < pairs.len() {
        let key = pairs[i].0;
        let mut sum = 0.0;
        let mut n = 0usize;
        while i < pairs.len() && pairs[i].0 == key {
            sum += pairs[i].1;
            n += 1;
            i += 1;
        }
        out.push((key, sum / n as f64));
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Upper bound on the automatic bin count. A single far outlier would
/// otherwise ask for millions of bins.
pub const MAX_BINS: usize = 10_000;

/// Number of equal-width bins: the narrower of the Sturges and
/// Freedman-Diaconis widths, falling back to Sturges when the IQR is zero.
/// Never more than [`MAX_BINS`].
pub fn auto_bin_count(values: &[f64]) -> usize {
    let sorted = sorted_finite(values);
    let n = sorted.len();
    if n == 0 {
        return 1;
    }
    let ptp = sorted[n - 1] - sorted[0];
    if ptp <= 0.0 {
        return 1;
    }

    let sturges = ptp / ((n as f64).log2() + 1.0);
    let iqr = quantile_sorted(&sorted, 0.75).unwrap_or(0.0)
        - quantile_sorted(&sorted, 0.25).unwrap_or(0.0);
    let fd = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);

    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };
    ((ptp / width).ceil() as usize).clamp(1, MAX_BINS)
}

/// Equal-width histogram over the data range. The last bin is closed on
/// both ends.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let xs = finite(values);
    if xs.is_empty() {
        return vec![];
    }
    let bins = bins.max(1);
    let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // A constant column gets a single unit-wide bin centered on the value.
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in xs {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Gaussian kernel density estimate sampled at `samples` evenly spaced
/// points across the data range, using Silverman's rule of thumb for the
/// bandwidth.
pub fn kde(values: &[f64], samples: usize) -> Vec<(f64, f64)> {
    let xs = finite(values);
    let n = xs.len();
    if n < 2 || samples < 2 {
        return vec![];
    }
    let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min >= max {
        return vec![];
    }

    let std = std_dev(&xs).unwrap_or(0.0);
    let bandwidth = (1.06 * std * (n as f64).powf(-0.2)).max(1e-3);
    let norm = (2.0 * std::f64::consts::PI).sqrt() * bandwidth * n as f64;

    (0..samples)
        .map(|i| {
            let x = min + (max - min) * i as f64 / (samples - 1) as f64;
            let density = xs
                .iter()
                .map(|&xi| {
                    let u = (x - xi) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                / norm;
            (x, density)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest value within 1.5 IQR below the first quartile.
    pub lower_whisker: f64,
    /// Highest value within 1.5 IQR above the third quartile.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let sorted = sorted_finite(values);
    let q1 = quantile_sorted(&sorted, 0.25)?;
    let median = quantile_sorted(&sorted, 0.5)?;
    let q3 = quantile_sorted(&sorted, 0.75)?;
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;

    let inside = || sorted.iter().copied().filter(|v| *v >= lo_fence && *v <= hi_fence);
    let lower_whisker = inside().next().unwrap_or(q1);
    let upper_whisker = inside().last().unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < lo_fence || *v > hi_fence)
        .collect();

    Some(BoxSummary {
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}
