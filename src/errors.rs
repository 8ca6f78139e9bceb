// Copyright 2024 Motif Miner Contributors.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration errors surfaced eagerly by [`crate::Miner::new`].

use thiserror::Error;

/// Errors reported when a [`crate::Miner`] is constructed with an invalid
/// configuration. The miner never partially succeeds: construction either
/// yields a usable `Miner` or one of these variants.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MotifError {
    #[error("minsup must lie in (0, 1], got {0}")]
    InvalidSupport(f64),
    #[error("alphabet size must lie in [2, 10], got {0}")]
    InvalidAlphabet(usize),
    #[error("PAA segment length must be >= 1, got {0}")]
    InvalidSegmentLength(usize),
    #[error("max_overlap must lie in (0, 1], got {0}")]
    InvalidOverlap(f64),
}
