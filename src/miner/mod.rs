// Copyright 2024 Motif Miner Contributors.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Level-wise, Apriori-style mining of frequent symbolic subsequences with
//! position-tracking support, candidate joining, infrequency pruning,
//! length filtering and LCS-overlap-based redundancy pruning.

mod lcs;

use std::collections::{HashMap, HashSet};

use vec_map::VecMap;

use crate::breakpoints;
use crate::motif::Motif;

/// Series index -> ascending starting positions of a pattern's occurrences.
pub(crate) type Positions = VecMap<Vec<usize>>;

/// Mines frequent symbolic patterns from `symbolic_db` and returns one
/// [`Motif`] per surviving pattern, with `pattern` and `indices` set.
///
/// `minsup`, `min_len`, `max_len` and `max_overlap` are assumed already
/// validated by [`crate::Miner::new`].
pub(crate) fn mine(
    symbolic_db: &[Vec<u8>],
    minsup: f64,
    min_len: usize,
    max_len: usize,
    max_overlap: f64,
) -> Vec<Motif> {
    let n = symbolic_db.len();
    if n == 0 {
        return Vec::new();
    }
    let min_freq = (minsup * n as f64).ceil() as usize;

    let mut current = mine_level_one(symbolic_db, min_freq);
    let mut all_patterns: Vec<(Vec<u8>, Positions)> =
        current.iter().map(|(p, pos)| (p.clone(), pos.clone())).collect();

    let mut level_len = 1;
    while !current.is_empty() && !(max_len > 0 && level_len == max_len) {
        let k = level_len + 1;
        let next = mine_next_level(symbolic_db, &current, k, min_freq);
        log::debug!("level {k}: {} frequent patterns", next.len());
        if next.is_empty() {
            break;
        }
        all_patterns.extend(next.iter().map(|(p, pos)| (p.clone(), pos.clone())));
        current = next;
        level_len = k;
    }

    let filtered: Vec<(Vec<u8>, Positions)> = all_patterns
        .into_iter()
        .filter(|(pattern, _)| pattern.len() >= min_len)
        .collect();

    let surviving = if max_overlap < 1.0 {
        prune_overlap(filtered, max_overlap)
    } else {
        filtered
    };

    surviving
        .into_iter()
        .map(|(pattern, positions)| {
            let rendered: String = pattern
                .iter()
                .map(|&rank| breakpoints::region_to_symbol(rank as usize))
                .collect();
            Motif::new(rendered, positions)
        })
        .collect()
}

/// Scans every symbolic sequence once, recording `(series, position)` for
/// each symbol, then drops symbols that fail the support threshold.
fn mine_level_one(symbolic_db: &[Vec<u8>], min_freq: usize) -> HashMap<Vec<u8>, Positions> {
    let mut candidates: HashMap<Vec<u8>, Positions> = HashMap::new();
    for (i, seq) in symbolic_db.iter().enumerate() {
        for (j, &symbol) in seq.iter().enumerate() {
            candidates
                .entry(vec![symbol])
                .or_default()
                .entry(i)
                .or_insert_with(Vec::new)
                .push(j);
        }
    }
    let frequent_count = candidates.values().filter(|pos| pos.len() >= min_freq).count();
    log::debug!(
        "level 1: {} candidates, {} frequent",
        candidates.len(),
        frequent_count
    );
    candidates.retain(|_, positions| positions.len() >= min_freq);
    candidates
}

/// Generates length-`k` candidates from the frequent length-`(k-1)`
/// patterns in `prev` by suffix-prefix join, counts their support using
/// `prev`'s position lists, and drops candidates failing `min_freq`.
fn mine_next_level(
    symbolic_db: &[Vec<u8>],
    prev: &HashMap<Vec<u8>, Positions>,
    k: usize,
    min_freq: usize,
) -> HashMap<Vec<u8>, Positions> {
    let keys: Vec<&Vec<u8>> = prev.keys().collect();
    let mut candidates: HashSet<Vec<u8>> = HashSet::new();
    for p in &keys {
        for q in &keys {
            if p[1..] == q[..q.len() - 1] {
                let mut joined = (*p).clone();
                joined.push(*q.last().unwrap());
                candidates.insert(joined);
            }
        }
    }

    let mut next: HashMap<Vec<u8>, Positions> = HashMap::new();
    for candidate in candidates {
        let parent_key = &candidate[..candidate.len() - 1];
        let Some(parent_positions) = prev.get(parent_key) else {
            continue;
        };
        let mut positions: Positions = VecMap::new();
        for (i, parent_js) in parent_positions.iter() {
            let seq = &symbolic_db[i];
            for &j in parent_js {
                if j + k <= seq.len() && seq[j..j + k] == candidate[..] {
                    positions.entry(i).or_insert_with(Vec::new).push(j);
                }
            }
        }
        if positions.len() >= min_freq {
            next.insert(candidate, positions);
        }
    }
    next
}

/// Sorts patterns by `(length desc, pattern asc)` and prunes any pattern
/// whose LCS with an earlier (longer-or-equal), not-yet-pruned pattern
/// covers more than `max_overlap` of its own length.
fn prune_overlap(
    mut patterns: Vec<(Vec<u8>, Positions)>,
    max_overlap: f64,
) -> Vec<(Vec<u8>, Positions)> {
    patterns.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

    let n = patterns.len();
    let mut pruned = vec![false; n];
    for i in 0..n {
        if pruned[i] {
            continue;
        }
        for j in (i + 1)..n {
            if pruned[j] {
                continue;
            }
            let m = patterns[j].0.len();
            let overlap = lcs::lcs_len(&patterns[i].0, &patterns[j].0) as f64 / m as f64;
            if overlap > max_overlap {
                pruned[j] = true;
            }
        }
    }

    let dropped = pruned.iter().filter(|&&p| p).count();
    log::debug!("overlap pruning: dropped {dropped} of {n} patterns");

    patterns
        .into_iter()
        .zip(pruned)
        .filter_map(|(item, was_pruned)| (!was_pruned).then_some(item))
        .collect()
}
