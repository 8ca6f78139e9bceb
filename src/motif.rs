// Copyright 2024 Motif Miner Contributors.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The [`Motif`] record: a frequent symbolic pattern together with its
//! per-series occurrences, continuous prototype, best match and error.

use ndarray::Array1;
use vec_map::VecMap;

/// A frequent representative motif.
///
/// Constructed by the pattern miner with only `pattern` and `indices`
/// populated; the materializer fills `length`, `prototype`, `best_match`
/// and `naed` through crate-private setters. Fields are private so that,
/// once `Miner::mine` returns, callers can only read a motif — matching
/// `spec.md` §3/§4.5's "motifs are read-only after this point".
#[derive(Clone, Debug)]
pub struct Motif {
    pattern: String,
    indices: VecMap<Vec<usize>>,
    length: usize,
    prototype: Array1<f64>,
    best_match: VecMap<usize>,
    naed: f64,
}

impl Motif {
    /// Creates a motif with only its pattern and occurrence positions set.
    /// Used by the pattern miner; the materializer fills the rest.
    pub(crate) fn new(pattern: String, indices: VecMap<Vec<usize>>) -> Self {
        Motif {
            pattern,
            indices,
            length: 0,
            prototype: Array1::zeros(0),
            best_match: VecMap::new(),
            naed: 0.0,
        }
    }

    /// Canonical symbolic pattern, e.g. `"abc"`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Series index -> ascending starting positions (symbolic coordinates)
    /// where `pattern` occurs as a contiguous substring.
    pub fn indices(&self) -> &VecMap<Vec<usize>> {
        &self.indices
    }

    /// Continuous length of the motif, `pattern.len() * w`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Elementwise mean of all series' average occurrences.
    pub fn prototype(&self) -> &Array1<f64> {
        &self.prototype
    }

    /// Series index -> continuous starting index of the best-matching
    /// occurrence in that series.
    pub fn best_match(&self) -> &VecMap<usize> {
        &self.best_match
    }

    /// Normalized aggregate Euclidean distance; lower is a tighter motif.
    pub fn naed(&self) -> f64 {
        self.naed
    }

    /// Number of series containing at least one occurrence of this motif.
    pub fn support(&self) -> usize {
        self.indices.len()
    }

    /// Sets the continuous length. Called only by the materializer.
    pub(crate) fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// Sets the prototype. Called only by the materializer.
    pub(crate) fn set_prototype(&mut self, prototype: Array1<f64>) {
        self.prototype = prototype;
    }

    /// Records the best-matching continuous start for one series. Called
    /// only by the materializer, once per series in `indices`.
    pub(crate) fn insert_best_match(&mut self, series: usize, continuous_start: usize) {
        self.best_match.insert(series, continuous_start);
    }

    /// Sets the ranking error. Called only by the materializer.
    pub(crate) fn set_naed(&mut self, naed: f64) {
        self.naed = naed;
    }
}

impl PartialEq for Motif {
    /// Two motifs are equal iff their patterns are equal.
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Motif {}
