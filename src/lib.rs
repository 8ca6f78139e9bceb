// Copyright 2024 Motif Miner Contributors.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Mining of frequent representative motifs (FRM) from databases of
//! real-valued, possibly unequal-length time series.
//!
//! The pipeline is: per-series z-normalization + Piecewise Aggregate
//! Approximation (PAA) + Symbolic Aggregate approXimation (SAX) turn each
//! series into a string over a small alphabet; a level-wise, Apriori-style
//! miner finds symbolic patterns frequent across a configurable fraction of
//! the series; each surviving pattern is then mapped back into continuous
//! space as a prototype, a best-matching occurrence per series, and a
//! length-normalized error used to rank motifs.
//!
//! # Example
//!
//! ```
//! use motif_miner::Miner;
//!
//! let db = vec![
//!     vec![0.0, 1.0, 2.0, 2.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
//!     vec![2.0, 1.0, 1.0, 0.0, 0.0, 0.0],
//!     vec![2.0, 1.0, 0.0, 0.0, 1.0, 2.0],
//!     vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
//! ];
//! let miner = Miner::new(0.5, 1, 3, 1, 0, 1.0, 0).unwrap();
//! let motifs = miner.mine(&db);
//! assert!(!motifs.is_empty());
//! ```

#[macro_use]
extern crate lazy_static;

mod breakpoints;
mod materialize;
mod miner;
mod preprocess;

pub mod errors;
pub mod motif;

pub use errors::MotifError;
pub use motif::Motif;

/// Mines frequent representative motifs from a time series database.
///
/// Construct with [`Miner::new`], which eagerly validates the
/// configuration, then call [`Miner::mine`] once per database.
#[derive(Clone, Debug)]
pub struct Miner {
    minsup: f64,
    w: usize,
    a: usize,
    min_len: usize,
    max_len: usize,
    max_overlap: f64,
    k: usize,
}

impl Miner {
    /// Constructs a miner, validating its configuration eagerly.
    ///
    /// - `minsup`: minimum fraction of series a motif must occur in, `(0, 1]`.
    /// - `w`: PAA segment length, `>= 1`.
    /// - `a`: SAX alphabet size, `[2, 10]`.
    /// - `min_len`: minimum symbolic pattern length; `< 1` is clamped to `1`.
    /// - `max_len`: maximum symbolic pattern length; `0` means unbounded.
    /// - `max_overlap`: LCS-overlap threshold, `(0, 1]`; `1` disables pruning.
    /// - `k`: number of top motifs to return; `0` means all.
    ///
    /// # Errors
    ///
    /// Returns [`MotifError`] if `minsup`, `a`, `w` or `max_overlap` are out
    /// of range.
    pub fn new(
        minsup: f64,
        w: usize,
        a: usize,
        min_len: usize,
        max_len: usize,
        max_overlap: f64,
        k: usize,
    ) -> Result<Self, MotifError> {
        if !(minsup > 0.0 && minsup <= 1.0) {
            return Err(MotifError::InvalidSupport(minsup));
        }
        if !(2..=10).contains(&a) {
            return Err(MotifError::InvalidAlphabet(a));
        }
        if w < 1 {
            return Err(MotifError::InvalidSegmentLength(w));
        }
        if !(max_overlap > 0.0 && max_overlap <= 1.0) {
            return Err(MotifError::InvalidOverlap(max_overlap));
        }

        let min_len = if min_len < 1 {
            log::warn!("min_len {min_len} < 1, clamping to 1");
            1
        } else {
            min_len
        };

        Ok(Miner {
            minsup,
            w,
            a,
            min_len,
            max_len,
            max_overlap,
            k,
        })
    }

    /// Runs the full pipeline — preprocess, mine, materialize, rank — over
    /// `db`, returning the top `k` motifs (all of them if `k == 0`) sorted
    /// ascending by [`Motif::naed`].
    pub fn mine(&self, db: &[Vec<f64>]) -> Vec<Motif> {
        let (standardized_db, symbolic_db) = preprocess::preprocess(db, self.w, self.a)
            .expect("configuration was validated in Miner::new");

        let mut motifs = miner::mine(
            &symbolic_db,
            self.minsup,
            self.min_len,
            self.max_len,
            self.max_overlap,
        );

        for motif in &mut motifs {
            materialize::materialize(motif, &standardized_db, self.w);
        }

        motifs.sort_by(|a, b| {
            a.naed()
                .partial_cmp(&b.naed())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.pattern().cmp(b.pattern()))
        });

        if self.k > 0 {
            motifs.truncate(self.k);
        }
        motifs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_minsup() {
        assert_eq!(
            Miner::new(0.0, 1, 3, 1, 0, 1.0, 0).unwrap_err(),
            MotifError::InvalidSupport(0.0)
        );
        assert_eq!(
            Miner::new(1.5, 1, 3, 1, 0, 1.0, 0).unwrap_err(),
            MotifError::InvalidSupport(1.5)
        );
    }

    #[test]
    fn new_rejects_out_of_range_alphabet() {
        assert_eq!(
            Miner::new(0.5, 1, 1, 1, 0, 1.0, 0).unwrap_err(),
            MotifError::InvalidAlphabet(1)
        );
        assert_eq!(
            Miner::new(0.5, 1, 11, 1, 0, 1.0, 0).unwrap_err(),
            MotifError::InvalidAlphabet(11)
        );
    }

    #[test]
    fn new_rejects_zero_segment_length() {
        assert_eq!(
            Miner::new(0.5, 0, 3, 1, 0, 1.0, 0).unwrap_err(),
            MotifError::InvalidSegmentLength(0)
        );
    }

    #[test]
    fn new_rejects_out_of_range_overlap() {
        assert_eq!(
            Miner::new(0.5, 1, 3, 1, 0, 0.0, 0).unwrap_err(),
            MotifError::InvalidOverlap(0.0)
        );
        assert_eq!(
            Miner::new(0.5, 1, 3, 1, 0, 1.5, 0).unwrap_err(),
            MotifError::InvalidOverlap(1.5)
        );
    }

    #[test]
    fn new_clamps_min_len_below_one() {
        let miner = Miner::new(0.5, 1, 3, 0, 0, 1.0, 0).unwrap();
        assert_eq!(miner.min_len, 1);
    }

    #[test]
    fn mine_on_empty_database_is_empty() {
        let miner = Miner::new(0.5, 1, 3, 1, 0, 1.0, 0).unwrap();
        assert!(miner.mine(&[]).is_empty());
    }

    #[test]
    fn mine_truncates_to_k() {
        let db = vec![
            vec![0.0, 1.0, 2.0, 2.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
            vec![2.0, 1.0, 1.0, 0.0, 0.0, 0.0],
            vec![2.0, 1.0, 0.0, 0.0, 1.0, 2.0],
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        ];
        let miner = Miner::new(0.5, 1, 3, 1, 0, 1.0, 2).unwrap();
        assert_eq!(miner.mine(&db).len(), 2);
    }

    #[test]
    fn mine_output_is_ranked_by_naed_ascending() {
        let db = vec![
            vec![0.0, 1.0, 2.0, 2.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
            vec![2.0, 1.0, 1.0, 0.0, 0.0, 0.0],
            vec![2.0, 1.0, 0.0, 0.0, 1.0, 2.0],
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        ];
        let miner = Miner::new(0.5, 1, 3, 1, 0, 1.0, 0).unwrap();
        let motifs = miner.mine(&db);
        for pair in motifs.windows(2) {
            assert!(pair[0].naed() <= pair[1].naed());
        }
    }
}
