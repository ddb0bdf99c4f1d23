//! Trap solver (§4.10): greatest fixed point of safety.

use std::collections::VecDeque;

use boundchess_core::Scenario;

use crate::graph::Pipeline;

/// Compute the Trap set: `result[i]` is true iff universe state `i` survives
/// the greatest-fixed-point safety removal.
///
/// Candidate membership starts at every state (optionally minus stalemates).
/// A black node is then removed immediately if it is forced out of the
/// candidate set outright — every black move escapes the universe, or it is
/// a checkmate (attacked, no move at all) — or if some deduped black
/// successor `w` that genuinely had a white reply to begin with has seen its
/// `reply_count` (white's own replies that stay in the candidate set) hit
/// zero. A white node with *no* possible reply at all (no inventory move,
/// no pass) never counts toward that last condition: white simply cannot
/// act there, which is not a containment failure, just white having nothing
/// to do. Removal propagates backward through the white-then-black
/// predecessor chain until the queue drains.
pub fn compute_trap(pipeline: &Pipeline, scenario: &Scenario) -> Vec<bool> {
    let n = pipeline.universe.len();
    let mut in_s = vec![true; n];

    if scenario.remove_stalemates {
        for i in 0..n {
            if !pipeline.attacked[i] && pipeline.black_raw_len[i] == 0 {
                in_s[i] = false;
            }
        }
    }

    let mut reply_count: Vec<i64> = (0..n)
        .map(|w| pipeline.white_in[w].iter().filter(|&&b| in_s[b]).count() as i64)
        .collect();
    let has_white_reply: Vec<bool> = (0..n).map(|w| !pipeline.white_in[w].is_empty()).collect();

    let mut white_pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    for w in 0..n {
        for &b in &pipeline.white_in[w] {
            white_pred[b].push(w);
        }
    }
    let mut black_pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    for b in 0..n {
        for &w in &pipeline.black_in[b] {
            black_pred[w].push(b);
        }
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    for b in 0..n {
        if !in_s[b] {
            continue;
        }
        // Forced out with no in-bound reply at all: a checkmate, or a state
        // where every black move escapes. Unconditional — this is distinct
        // from the non-attacked, zero-move stalemate case the
        // `remove_stalemates` pass above already handles.
        if pipeline.black_in[b].is_empty() && (pipeline.attacked[b] || pipeline.black_escape[b]) {
            queue.push_back(b);
            continue;
        }
        if pipeline.black_in[b].iter().any(|&w| has_white_reply[w] && reply_count[w] == 0) {
            queue.push_back(b);
        }
    }

    while let Some(b) = queue.pop_front() {
        if !in_s[b] {
            continue;
        }
        in_s[b] = false;

        for &w in &white_pred[b] {
            if reply_count[w] <= 0 {
                continue;
            }
            reply_count[w] -= 1;
            if reply_count[w] == 0 {
                for &pb in &black_pred[w] {
                    if in_s[pb] {
                        queue.push_back(pb);
                    }
                }
            }
        }
    }

    in_s
}
