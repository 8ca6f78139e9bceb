// Copyright 2024 Motif Miner Contributors.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The static SAX breakpoint table.
//!
//! Values are the standard-normal equiprobable quantiles tabulated in
//! Lin, Keogh, Linardi & Chiu (2003), *A Symbolic Representation of Time
//! Series, with Implications for Streaming Algorithms*, Table 3, for
//! alphabet sizes `a` from 2 through 10. For alphabet size `a` there are
//! `a - 1` ascending thresholds dividing the real line into `a` equiprobable
//! regions under a standard normal distribution.

use std::collections::HashMap;

lazy_static! {
    static ref BREAKPOINTS: HashMap<usize, Vec<f64>> = {
        let mut m = HashMap::new();
        m.insert(2, vec![0.0]);
        m.insert(3, vec![-0.43, 0.43]);
        m.insert(4, vec![-0.67, 0.0, 0.67]);
        m.insert(5, vec![-0.84, -0.25, 0.25, 0.84]);
        m.insert(6, vec![-0.97, -0.43, 0.0, 0.43, 0.97]);
        m.insert(7, vec![-1.07, -0.57, -0.18, 0.18, 0.57, 1.07]);
        m.insert(8, vec![-1.15, -0.67, -0.32, 0.0, 0.32, 0.67, 1.15]);
        m.insert(
            9,
            vec![-1.22, -0.76, -0.43, -0.14, 0.14, 0.43, 0.76, 1.22],
        );
        m.insert(
            10,
            vec![-1.28, -0.84, -0.52, -0.25, 0.0, 0.25, 0.52, 0.84, 1.28],
        );
        m
    };
}

/// Returns the `a - 1` ascending thresholds for alphabet size `a`.
///
/// Panics if `a` is outside `[2, 10]`; callers are expected to validate `a`
/// beforehand (see [`crate::Miner::new`] and [`crate::preprocess::preprocess`]).
pub fn thresholds(a: usize) -> &'static [f64] {
    BREAKPOINTS
        .get(&a)
        .unwrap_or_else(|| panic!("no breakpoints tabulated for alphabet size {a}"))
}

/// Maps a PAA value to its SAX region index against `thresholds(a)`:
/// the smallest `k` with `value <= thresholds[k]`, or `a - 1` if no
/// threshold qualifies (the open-ended rightmost bin).
pub fn region(value: f64, a: usize) -> usize {
    let t = thresholds(a);
    t.iter()
        .position(|&threshold| value <= threshold)
        .unwrap_or(a - 1)
}

/// Renders a SAX region index as its canonical lowercase letter (`0 -> 'a'`).
pub fn region_to_symbol(region: usize) -> char {
    (b'a' + region as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_len_matches_alphabet_size() {
        for a in 2..=10 {
            assert_eq!(thresholds(a).len(), a - 1);
        }
    }

    #[test]
    fn region_assigns_rightmost_open_bin() {
        assert_eq!(region(100.0, 4), 3);
        assert_eq!(region(-100.0, 4), 0);
    }

    #[test]
    fn region_matches_spec_example() {
        // a=4 thresholds are [-0.67, 0, 0.67].
        assert_eq!(region(-1.0, 4), 0);
        assert_eq!(region(-0.67, 4), 0);
        assert_eq!(region(-0.1, 4), 1);
        assert_eq!(region(0.0, 4), 1);
        assert_eq!(region(0.5, 4), 2);
        assert_eq!(region(0.67, 4), 2);
        assert_eq!(region(1.0, 4), 3);
    }

    #[test]
    fn region_to_symbol_is_canonical() {
        assert_eq!(region_to_symbol(0), 'a');
        assert_eq!(region_to_symbol(1), 'b');
        assert_eq!(region_to_symbol(9), 'j');
    }
}
