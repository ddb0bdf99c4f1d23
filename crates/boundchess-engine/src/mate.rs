//! Forced Mate solver (§4.12): least fixed point of adversarial
//! reachability, seeded at terminal checkmates.

use std::collections::VecDeque;

use crate::graph::Pipeline;

enum Node {
    Black(usize),
    White(usize),
}

/// Compute the Forced Mate region: `result[i]` is true iff universe state
/// `i` is a black node from which white forces checkmate regardless of how
/// black replies. An escape route keeps `remaining` permanently above zero
/// (escape is not itself a white-owned node, so it never gets marked), which
/// is exactly why an escaping state can never be forced-mate.
pub fn compute_mate(pipeline: &Pipeline) -> Vec<bool> {
    let n = pipeline.universe.len();

    let mut win_b = vec![false; n];
    let mut win_w = vec![false; n];

    let mut pred_b_of_w: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut pred_w_of_b: Vec<Vec<usize>> = vec![Vec::new(); n];
    for bi in 0..n {
        for &wi in &pipeline.black_in[bi] {
            pred_b_of_w[wi].push(bi);
        }
    }
    for wi in 0..n {
        for &bi in &pipeline.white_in[wi] {
            pred_w_of_b[bi].push(wi);
        }
    }

    let mut remaining: Vec<i64> = (0..n)
        .map(|bi| {
            pipeline.black_in[bi].len() as i64 + if pipeline.black_escape[bi] { 1 } else { 0 }
        })
        .collect();

    let mut queue: VecDeque<Node> = VecDeque::new();

    for bi in 0..n {
        if pipeline.black_escape[bi] || !pipeline.black_in[bi].is_empty() {
            continue;
        }
        if pipeline.attacked[bi] {
            win_b[bi] = true;
            queue.push_back(Node::Black(bi));
        }
    }

    while let Some(node) = queue.pop_front() {
        match node {
            Node::Black(bi) => {
                for &wi in &pred_w_of_b[bi] {
                    if win_w[wi] {
                        continue;
                    }
                    win_w[wi] = true;
                    queue.push_back(Node::White(wi));
                }
            }
            Node::White(wi) => {
                for &bi in &pred_b_of_w[wi] {
                    if win_b[bi] {
                        continue;
                    }
                    if remaining[bi] > 0 {
                        remaining[bi] -= 1;
                    }
                    if remaining[bi] == 0 && !pipeline.black_in[bi].is_empty() {
                        win_b[bi] = true;
                        queue.push_back(Node::Black(bi));
                    }
                }
            }
        }
    }

    win_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundchess_core::{Inventory, MoveBoundMode, Scenario};

    #[test]
    fn no_inventory_never_mates() {
        let scenario = Scenario::new(
            1,
            1,
            MoveBoundMode::Inclusive,
            Inventory { white_king: false, queens: 0, rooks: 0, bishops: 0, knights: 0 },
            true,
            false,
            true,
        )
        .unwrap();
        let pipeline = Pipeline::build(&scenario);
        let mate = compute_mate(&pipeline);
        assert!(mate.iter().all(|&b| !b));
    }

    #[test]
    fn king_and_queen_produces_forced_mates() {
        let scenario = Scenario::new(
            3,
            1,
            MoveBoundMode::Inclusive,
            Inventory { white_king: true, queens: 1, rooks: 0, bishops: 0, knights: 0 },
            true,
            false,
            true,
        )
        .unwrap();
        let pipeline = Pipeline::build(&scenario);
        let mate = compute_mate(&pipeline);
        assert!(mate.iter().any(|&b| b), "K+Q vs K should force at least one mate in this box");
    }

    #[test]
    fn every_terminal_mate_is_attacked_with_no_moves() {
        let scenario = Scenario::new(
            3,
            1,
            MoveBoundMode::Inclusive,
            Inventory { white_king: true, queens: 1, rooks: 0, bishops: 0, knights: 0 },
            true,
            false,
            true,
        )
        .unwrap();
        let pipeline = Pipeline::build(&scenario);
        for i in 0..pipeline.universe.len() {
            let is_terminal =
                !pipeline.black_escape[i] && pipeline.black_in[i].is_empty() && pipeline.attacked[i];
            if is_terminal {
                assert_eq!(pipeline.black_raw_len[i], 0);
            }
        }
    }
}
