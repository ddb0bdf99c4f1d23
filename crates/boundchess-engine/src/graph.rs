//! Universe enumeration plus the per-state move/threat bookkeeping shared by
//! every solver: §4.9's raw counters and the deduped, in-universe bipartite
//! edge lists that §4.10–§4.12 build on.

use std::collections::{BTreeSet, HashMap};

use boundchess_core::{
    Scenario, State, black_successors, enumerate_universe, is_attacked, white_successors,
};

/// Everything the solvers need, computed once per scenario.
pub struct Pipeline {
    pub universe: Vec<State>,
    pub index: HashMap<State, usize>,
    pub attacked: Vec<bool>,
    /// Total (possibly-duplicate) black successors per state — zero here
    /// means the state has no black move of any kind.
    pub black_raw_len: Vec<usize>,
    /// Deduped, sorted, in-universe black successor indices per state.
    pub black_in: Vec<Vec<usize>>,
    pub black_escape: Vec<bool>,
    /// Deduped, sorted, in-universe white successor indices per state.
    pub white_in: Vec<Vec<usize>>,
    pub black_moves_in: u64,
    pub black_moves_escape: u64,
    pub white_moves_in: u64,
    pub white_moves_escape: u64,
    pub checkmates: u64,
}

impl Pipeline {
    pub fn build(scenario: &Scenario) -> Pipeline {
        let kinds = scenario.slot_kinds();
        let runs = scenario.runs();
        let wk = scenario.white_king_slot();
        let m_prime = scenario.effective_move_bound();

        let universe =
            enumerate_universe(scenario.bound, &kinds, &runs, wk, scenario.allow_captures);
        let index: HashMap<State, usize> = universe
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, s)| (s, i))
            .collect();

        let n = universe.len();
        let mut attacked = Vec::with_capacity(n);
        let mut black_raw_len = Vec::with_capacity(n);
        let mut black_in: Vec<Vec<usize>> = Vec::with_capacity(n);
        let mut black_escape = Vec::with_capacity(n);
        let mut white_in: Vec<Vec<usize>> = Vec::with_capacity(n);

        let mut black_moves_in = 0u64;
        let mut black_moves_escape = 0u64;
        let mut white_moves_in = 0u64;
        let mut white_moves_escape = 0u64;
        let mut checkmates = 0u64;

        for s in &universe {
            let a = is_attacked(&s.board, &kinds);
            attacked.push(a);

            let b_moves = black_successors(s, &kinds, &runs, wk);
            black_raw_len.push(b_moves.len());

            let mut in_set = BTreeSet::new();
            let mut esc = false;
            for t in &b_moves {
                match index.get(t) {
                    Some(&ti) => {
                        black_moves_in += 1;
                        in_set.insert(ti);
                    }
                    None => {
                        black_moves_escape += 1;
                        esc = true;
                    }
                }
            }
            black_in.push(in_set.into_iter().collect());
            black_escape.push(esc);

            if a && b_moves.is_empty() {
                checkmates += 1;
            }

            let w_moves = white_successors(
                s,
                &kinds,
                &runs,
                wk,
                m_prime,
                scenario.allow_captures,
                scenario.white_can_pass,
            );
            let mut w_in_set = BTreeSet::new();
            for t in &w_moves {
                match index.get(t) {
                    Some(&ti) => {
                        white_moves_in += 1;
                        w_in_set.insert(ti);
                    }
                    None => {
                        white_moves_escape += 1;
                    }
                }
            }
            white_in.push(w_in_set.into_iter().collect());
        }

        Pipeline {
            universe,
            index,
            attacked,
            black_raw_len,
            black_in,
            black_escape,
            white_in,
            black_moves_in,
            black_moves_escape,
            white_moves_in,
            white_moves_escape,
            checkmates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundchess_core::{Inventory, MoveBoundMode};

    fn lone_king(bound: i32) -> Scenario {
        Scenario::new(
            bound,
            1,
            MoveBoundMode::Inclusive,
            Inventory { white_king: false, queens: 0, rooks: 0, bishops: 0, knights: 0 },
            true,
            false,
            true,
        )
        .unwrap()
    }

    #[test]
    fn lone_king_universe_has_nine_states_at_bound_one() {
        let pipeline = Pipeline::build(&lone_king(1));
        assert_eq!(pipeline.universe.len(), 9);
        // A lone king always has at least one in-bound king move.
        assert!(pipeline.black_moves_in > 0);
        assert_eq!(pipeline.checkmates, 0);
    }

    #[test]
    fn corner_king_has_escaping_moves() {
        let pipeline = Pipeline::build(&lone_king(1));
        let corner = pipeline
            .universe
            .iter()
            .position(|s| s.king.chebyshev() == 1)
            .expect("bound-1 box has a corner/edge state");
        assert!(pipeline.black_escape[corner]);
    }
}
