//! Tempo solver (§4.11): two-player Büchi fair-recurrence fixpoint,
//! restricted to Trap.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::graph::Pipeline;

/// Compute the Tempo set: `result[i]` is true iff universe state `i` is a
/// black node retained by the nested white/black attractor loop. Empty
/// immediately when white cannot pass or Trap is empty.
pub fn compute_tempo(pipeline: &Pipeline, trap: &[bool], white_can_pass: bool) -> Vec<bool> {
    let n = pipeline.universe.len();
    let mut tempo = vec![false; n];

    if !white_can_pass {
        return tempo;
    }
    let b_list: Vec<usize> = (0..n).filter(|&i| trap[i]).collect();
    if b_list.is_empty() {
        return tempo;
    }
    let b_index: HashMap<usize, usize> = b_list.iter().enumerate().map(|(i, &s)| (s, i)).collect();

    let mut w_list: Vec<usize> = Vec::new();
    let mut w_index: HashMap<usize, usize> = HashMap::new();
    let mut bw_succ: Vec<Vec<usize>> = vec![Vec::new(); b_list.len()];

    for (bi, &b) in b_list.iter().enumerate() {
        let mut succ: BTreeSet<usize> = BTreeSet::new();
        for &w in &pipeline.black_in[b] {
            let wi = *w_index.entry(w).or_insert_with(|| {
                w_list.push(w);
                w_list.len() - 1
            });
            succ.insert(wi);
        }
        bw_succ[bi] = succ.into_iter().collect();
    }

    let mut wb_succ: Vec<Vec<usize>> = vec![Vec::new(); w_list.len()];
    for (wi, &w) in w_list.iter().enumerate() {
        let mut succ: Vec<usize> = pipeline.white_in[w]
            .iter()
            .filter_map(|b| b_index.get(b).copied())
            .collect();
        succ.sort_unstable();
        succ.dedup();
        wb_succ[wi] = succ;
    }

    // A white node is accepting iff its own state (the null-move target) is
    // itself a black node in Trap.
    let is_accept_w: Vec<bool> = w_list.iter().map(|w| b_index.contains_key(w)).collect();

    let mut in_z_b = vec![true; b_list.len()];
    let mut in_z_w = vec![true; w_list.len()];

    let mut outer_passes = 0u32;
    loop {
        outer_passes += 1;
        let (in_y_b, in_y_w) = attractor_white(&in_z_b, &in_z_w, &bw_succ, &wb_succ, &is_accept_w);

        let target_b: Vec<bool> = (0..b_list.len()).map(|i| in_z_b[i] && !in_y_b[i]).collect();
        let target_w: Vec<bool> = (0..w_list.len()).map(|i| in_z_w[i] && !in_y_w[i]).collect();

        let (in_x_b, in_x_w) =
            attractor_black(&in_z_b, &in_z_w, &bw_succ, &wb_succ, &target_b, &target_w);

        let mut any_removed = false;
        for i in 0..b_list.len() {
            if in_z_b[i] && in_x_b[i] {
                in_z_b[i] = false;
                any_removed = true;
            }
        }
        for i in 0..w_list.len() {
            if in_z_w[i] && in_x_w[i] {
                in_z_w[i] = false;
                any_removed = true;
            }
        }

        if !any_removed {
            break;
        }
    }
    debug!(outer_passes, "tempo attractor loop converged");

    for (bi, &b) in b_list.iter().enumerate() {
        if in_z_b[bi] {
            tempo[b] = true;
        }
    }
    tempo
}

/// `pre₁` where white chooses the next member: a white node joins once some
/// successor is already in; a black node joins only once every successor
/// still inside the working space `Z` is in (and at least one exists).
fn attractor_white(
    in_z_b: &[bool],
    in_z_w: &[bool],
    bw_succ: &[Vec<usize>],
    wb_succ: &[Vec<usize>],
    is_accept_w: &[bool],
) -> (Vec<bool>, Vec<bool>) {
    let b_len = in_z_b.len();
    let w_len = in_z_w.len();
    let mut in_a_b = vec![false; b_len];
    let mut in_a_w = vec![false; w_len];

    for wi in 0..w_len {
        if in_z_w[wi] && is_accept_w[wi] {
            in_a_w[wi] = true;
        }
    }

    let mut changed = true;
    while changed {
        changed = false;

        for wi in 0..w_len {
            if !in_z_w[wi] || in_a_w[wi] {
                continue;
            }
            if wb_succ[wi].iter().any(|&bi| in_z_b[bi] && in_a_b[bi]) {
                in_a_w[wi] = true;
                changed = true;
            }
        }

        for bi in 0..b_len {
            if !in_z_b[bi] || in_a_b[bi] {
                continue;
            }
            let mut saw = false;
            let mut all_in = true;
            for &wi in &bw_succ[bi] {
                if !in_z_w[wi] {
                    continue;
                }
                saw = true;
                if !in_a_w[wi] {
                    all_in = false;
                    break;
                }
            }
            if saw && all_in {
                in_a_b[bi] = true;
                changed = true;
            }
        }
    }

    (in_a_b, in_a_w)
}

/// `pre₁` where black chooses the next member: dual of [`attractor_white`].
fn attractor_black(
    in_z_b: &[bool],
    in_z_w: &[bool],
    bw_succ: &[Vec<usize>],
    wb_succ: &[Vec<usize>],
    target_b: &[bool],
    target_w: &[bool],
) -> (Vec<bool>, Vec<bool>) {
    let b_len = in_z_b.len();
    let w_len = in_z_w.len();
    let mut in_a_b = vec![false; b_len];
    let mut in_a_w = vec![false; w_len];

    for bi in 0..b_len {
        if in_z_b[bi] && target_b[bi] {
            in_a_b[bi] = true;
        }
    }
    for wi in 0..w_len {
        if in_z_w[wi] && target_w[wi] {
            in_a_w[wi] = true;
        }
    }

    let mut changed = true;
    while changed {
        changed = false;

        for bi in 0..b_len {
            if !in_z_b[bi] || in_a_b[bi] {
                continue;
            }
            if bw_succ[bi].iter().any(|&wi| in_z_w[wi] && in_a_w[wi]) {
                in_a_b[bi] = true;
                changed = true;
            }
        }

        for wi in 0..w_len {
            if !in_z_w[wi] || in_a_w[wi] {
                continue;
            }
            let mut saw = false;
            let mut all_in = true;
            for &bi in &wb_succ[wi] {
                if !in_z_b[bi] {
                    continue;
                }
                saw = true;
                if !in_a_b[bi] {
                    all_in = false;
                    break;
                }
            }
            if saw && all_in {
                in_a_w[wi] = true;
                changed = true;
            }
        }
    }

    (in_a_b, in_a_w)
}
