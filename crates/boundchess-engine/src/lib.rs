//! Solver orchestration over the bounded-universe bipartite game graph:
//! universe enumeration and counters, then the Trap (safety), Tempo
//! (two-player Büchi) and Forced Mate (reachability) fixpoints.

pub mod counts;
pub mod graph;
pub mod mate;
pub mod tempo;
pub mod trap;

use tracing::{debug, info};

use boundchess_core::Scenario;

pub use counts::Counts;
pub use graph::Pipeline;

/// Run the full pipeline for one scenario: enumerate, count, and solve all
/// three fixpoints.
pub fn solve(scenario: &Scenario) -> Counts {
    let pipeline = Pipeline::build(scenario);
    debug!(states = pipeline.universe.len(), "pipeline built");

    let in_trap = trap::compute_trap(&pipeline, scenario);
    info!(trap = in_trap.iter().filter(|&&b| b).count(), "trap solved");

    let in_tempo = tempo::compute_tempo(&pipeline, &in_trap, scenario.white_can_pass);
    info!(tempo = in_tempo.iter().filter(|&&b| b).count(), "tempo solved");

    let in_mate = mate::compute_mate(&pipeline);
    info!(mate = in_mate.iter().filter(|&&b| b).count(), "mate solved");

    Counts::from_pipeline(&pipeline, &in_trap, &in_tempo, &in_mate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundchess_core::{Inventory, MoveBoundMode};

    #[test]
    fn lone_king_scenario_is_fully_trapped_and_never_mated() {
        // No inventory and no pass means white never has a single reply, so
        // no white node's reply count can ever genuinely hit zero, and with
        // B=1 every one of the nine king squares (including the four
        // corners, which also have moves that leave the box) keeps at least
        // one in-bound king step — so nothing is ever forced out. With no
        // attacker present nothing is ever in check either, so there are no
        // checkmates to seed a forced mate from.
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
        let counts = solve(&scenario);
        assert_eq!(counts.universe_states, 9);
        assert_eq!(counts.checkmates, 0);
        assert_eq!(counts.trap, 9);
        assert_eq!(counts.mate, 0);
    }

    #[test]
    fn lone_knight_scenario_has_no_checkmates() {
        // §8 scenario 2: {knights:1}, B=1, allow_captures=false. A lone
        // knight can never deliver check by itself from within a box this
        // small, and a leaper has nothing for the through-origin filter to
        // screen in the first place.
        let scenario = Scenario::new(
            1,
            1,
            MoveBoundMode::Inclusive,
            Inventory { white_king: false, queens: 0, rooks: 0, bishops: 0, knights: 1 },
            false,
            false,
            true,
        )
        .unwrap();
        let counts = solve(&scenario);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn rook_scenario_pipeline_never_crosses_the_origin() {
        // §8 scenario 3: {rooks:1}, B=2, M=2 inclusive, captures on. The
        // through-origin filter (exercised directly in
        // `boundchess_core::movegen`) must hold end to end through the full
        // pipeline: no white-move edge may take the rook from one side of
        // the king to the other in a single step.
        let scenario = Scenario::new(
            2,
            2,
            MoveBoundMode::Inclusive,
            Inventory { white_king: false, queens: 0, rooks: 1, bishops: 0, knights: 0 },
            true,
            false,
            true,
        )
        .unwrap();
        let pipeline = Pipeline::build(&scenario);
        for (i, from) in pipeline.universe.iter().enumerate() {
            let Some(rook_from) = from.board.get(0) else { continue };
            for &j in &pipeline.white_in[i] {
                let to = &pipeline.universe[j];
                if let Some(rook_to) = to.board.get(0) {
                    if rook_to != rook_from {
                        assert!(
                            !boundchess_core::crosses_origin(rook_from, rook_to),
                            "rook move from {rook_from} to {rook_to} must not cross the king's square"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn stalemate_removal_flag_changes_trap_but_not_universe_size() {
        // §8 scenario 6.
        let base = |remove_stalemates| {
            Scenario::new(
                2,
                1,
                MoveBoundMode::Inclusive,
                Inventory { white_king: true, queens: 1, rooks: 0, bishops: 0, knights: 0 },
                true,
                false,
                remove_stalemates,
            )
            .unwrap()
        };
        let with_removal = solve(&base(true));
        let without_removal = solve(&base(false));
        assert_eq!(with_removal.universe_states, without_removal.universe_states);
        assert!(with_removal.trap <= without_removal.trap);
    }
}
