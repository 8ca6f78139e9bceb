// Copyright 2024 Motif Miner Contributors.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Z-normalization, Piecewise Aggregate Approximation (PAA) and Symbolic
//! Aggregate approXimation (SAX): turns a database of real-valued time
//! series into standardized continuous series plus symbolic sequences
//! over an alphabet of size `a`.

use itertools::Itertools;

use crate::breakpoints;
use crate::errors::MotifError;

/// Standardizes, PAA-reduces and SAX-discretizes an entire database.
///
/// `standardized_db[i]` has the same length as `db[i]`.
/// `symbolic_db[i]` has length `db[i].len() / w` (integer division).
///
/// # Errors
///
/// Returns [`MotifError::InvalidAlphabet`] if `a` is outside `[2, 10]`, or
/// [`MotifError::InvalidSegmentLength`] if `w < 1`.
pub fn preprocess(
    db: &[Vec<f64>],
    w: usize,
    a: usize,
) -> Result<(Vec<Vec<f64>>, Vec<Vec<u8>>), MotifError> {
    if w < 1 {
        return Err(MotifError::InvalidSegmentLength(w));
    }
    if !(2..=10).contains(&a) {
        return Err(MotifError::InvalidAlphabet(a));
    }

    let standardized_db: Vec<Vec<f64>> = db.iter().map(|series| standardize(series)).collect();
    let symbolic_db: Vec<Vec<u8>> = standardized_db
        .iter()
        .map(|series| sax(series, w, a))
        .collect();

    for (i, series) in standardized_db.iter().enumerate() {
        log::trace!(
            "series {i}: standardized len={}, symbolic len={}",
            series.len(),
            symbolic_db[i].len()
        );
    }

    Ok((standardized_db, symbolic_db))
}

/// Standardizes one series to zero mean, unit population standard deviation.
/// A zero-variance series standardizes to all zeros.
fn standardize(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }
    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    if std == 0.0 {
        vec![0.0; series.len()]
    } else {
        series.iter().map(|x| (x - mean) / std).collect()
    }
}

/// Piecewise Aggregate Approximation: the arithmetic mean of each
/// non-overlapping window of `w` samples. A trailing remainder shorter
/// than `w` is discarded.
fn paa(series: &[f64], w: usize) -> Vec<f64> {
    let n = series.len() / w;
    series
        .iter()
        .chunks(w)
        .into_iter()
        .take(n)
        .map(|chunk| chunk.sum::<f64>() / w as f64)
        .collect()
}

/// Symbolic Aggregate approXimation: PAA followed by per-value breakpoint
/// lookup, yielding SAX region indices (`0..a`) rather than rendered
/// letters — the caller renders to the canonical alphabet at the API
/// boundary via [`breakpoints::region_to_symbol`].
fn sax(series: &[f64], w: usize, a: usize) -> Vec<u8> {
    paa(series, w)
        .into_iter()
        .map(|value| breakpoints::region(value, a) as u8)
        .collect()
}
