//! Counters pass (§4.9): the final integer summary of a scenario.

use crate::graph::Pipeline;

/// The published per-scenario metrics (§1, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub universe_states: u64,
    pub black_moves_in: u64,
    pub black_moves_escape: u64,
    pub white_moves_in: u64,
    pub white_moves_escape: u64,
    pub checkmates: u64,
    pub trap: u64,
    pub tempo: u64,
    pub mate: u64,
}

impl Counts {
    pub fn from_pipeline(pipeline: &Pipeline, trap: &[bool], tempo: &[bool], mate: &[bool]) -> Counts {
        Counts {
            universe_states: pipeline.universe.len() as u64,
            black_moves_in: pipeline.black_moves_in,
            black_moves_escape: pipeline.black_moves_escape,
            white_moves_in: pipeline.white_moves_in,
            white_moves_escape: pipeline.white_moves_escape,
            checkmates: pipeline.checkmates,
            trap: trap.iter().filter(|&&b| b).count() as u64,
            tempo: tempo.iter().filter(|&&b| b).count() as u64,
            mate: mate.iter().filter(|&&b| b).count() as u64,
        }
    }
}
