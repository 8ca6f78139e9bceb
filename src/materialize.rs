// Copyright 2024 Motif Miner Contributors.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Maps a symbolic [`Motif`] back into continuous space: reconstructs each
//! series' average occurrence, averages those into a prototype, then picks
//! the best-matching occurrence per series and scores the motif.

use ndarray::Array1;

use crate::motif::Motif;

/// Fills in `length`, `prototype`, `best_match` and `naed` for `motif`,
/// using the standardized (not raw) database and the PAA segment length
/// `w` the motif's pattern was mined under.
pub(crate) fn materialize(motif: &mut Motif, standardized_db: &[Vec<f64>], w: usize) {
    let k = motif.pattern().chars().count();
    let length = k * w;
    motif.set_length(length);

    let mut average_occurrences: Vec<(usize, Array1<f64>)> =
        Vec::with_capacity(motif.indices().len());
    for (i, positions) in motif.indices().iter() {
        let mut sum = Array1::<f64>::zeros(length);
        for &j in positions {
            let occurrence = occurrence_window(&standardized_db[i], j, w, length);
            sum += &occurrence;
        }
        sum /= positions.len() as f64;
        average_occurrences.push((i, sum));
    }

    let series_count = average_occurrences.len() as f64;
    let mut prototype = Array1::<f64>::zeros(length);
    for (_, avg) in &average_occurrences {
        prototype += avg;
    }
    prototype /= series_count;
    motif.set_prototype(prototype);

    // Collected up front so the per-series loop below can take `motif`
    // mutably (via `insert_best_match`) without an overlapping immutable
    // borrow from `motif.indices()`.
    let entries: Vec<(usize, Vec<usize>)> = motif
        .indices()
        .iter()
        .map(|(i, positions)| (i, positions.clone()))
        .collect();
    let support = entries.len();

    let mut total_min_distance = 0.0;
    for (i, positions) in entries {
        let mut best_position = positions[0];
        let mut best_distance = f64::INFINITY;
        for &j in &positions {
            let occurrence = occurrence_window(&standardized_db[i], j, w, length);
            let distance = euclidean_distance(&occurrence, motif.prototype());
            if distance < best_distance {
                best_distance = distance;
                best_position = j;
            }
        }
        motif.insert_best_match(i, best_position * w);
        total_min_distance += best_distance;
        log::trace!(
            "motif {:?}: series {i} best match at {best_position}, d={best_distance}",
            motif.pattern()
        );
    }
    motif.set_naed(total_min_distance / (support as f64 * length as f64));
    log::trace!("motif {:?}: naed={}", motif.pattern(), motif.naed());
}

/// Extracts the `length`-sample window starting at symbolic position `j`
/// (so continuous offset `j * w`). If the window would overrun the series
/// end — possible when the series' trailing PAA segment was incomplete —
/// the start is shifted left by the overflow so the window keeps its full
/// length instead of being truncated.
fn occurrence_window(series: &[f64], j: usize, w: usize, length: usize) -> Array1<f64> {
    debug_assert!(length <= series.len(), "occurrence window longer than its series");
    let mut start = j * w;
    let mut end = start + length;
    if end > series.len() {
        let overflow = end - series.len();
        start = start.saturating_sub(overflow);
        end = start + length;
    }
    Array1::from_iter(series[start..end].iter().copied())
}

fn euclidean_distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    (a - b).mapv(|d| d * d).sum().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vec_map::VecMap;

    fn motif_with_indices(pattern: &str, indices: &[(usize, Vec<usize>)]) -> Motif {
        let mut map = VecMap::new();
        for (i, positions) in indices {
            map.insert(*i, positions.clone());
        }
        Motif::new(pattern.to_string(), map)
    }

    #[test]
    fn prototype_shape_matches_pattern_length_times_w() {
        let db = vec![vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]];
        let mut motif = motif_with_indices("ab", &[(0, vec![0]), (1, vec![0])]);
        materialize(&mut motif, &db, 2);
        assert_eq!(motif.prototype().len(), 4);
        assert_eq!(motif.length(), 4);
    }

    #[test]
    fn best_match_picks_minimal_distance_occurrence() {
        // series 0 has two occurrences: one near series 1's sole occurrence
        // ([1,1]), one far away ([0,0]). The near one should be chosen.
        let db = vec![
            vec![0.0, 0.0, 10.0, 10.0, 1.0, 1.0],
            vec![1.0, 1.0, 9.0, 9.0],
        ];
        let mut motif = motif_with_indices("aa", &[(0, vec![0, 4]), (1, vec![0])]);
        materialize(&mut motif, &db, 1);
        assert_eq!(*motif.best_match().get(0).unwrap(), 4);
        assert_eq!(*motif.best_match().get(1).unwrap(), 0);
    }

    #[test]
    fn naed_is_nonnegative_and_averages_minimum_distances() {
        let db = vec![vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 3.0]];
        let mut motif = motif_with_indices("aa", &[(0, vec![0]), (1, vec![0])]);
        materialize(&mut motif, &db, 2);
        assert!(motif.naed() >= 0.0);
        // both series contribute an identical occurrence equal to the
        // prototype, so the minimal distance in each case is exactly zero.
        approx::assert_abs_diff_eq!(motif.naed(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn tail_overrun_shifts_window_left_instead_of_truncating() {
        // series has length 5; a window of length 4 starting at symbolic
        // position 1 with w=2 would run from sample 2 to 6, overrunning by 1.
        let db = vec![vec![10.0, 20.0, 30.0, 40.0, 50.0]];
        let mut motif = motif_with_indices("aa", &[(0, vec![1])]);
        materialize(&mut motif, &db, 2);
        assert_eq!(motif.prototype().len(), 4);
        // shifted window is samples [1..5): [20, 30, 40, 50]
        assert_eq!(motif.prototype().to_vec(), vec![20.0, 30.0, 40.0, 50.0]);
    }
}
