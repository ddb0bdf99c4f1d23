//! Black and white successor-state generation (§4.7, §4.8).

use std::ops::Range;

use crate::board::{Board, Slot, State};
use crate::canonical::canonicalize;
use crate::coord::{Coord, KING_STEPS};
use crate::legality::is_legal;
use crate::movegen::piece_successor_boards;
use crate::piece::PieceKind;
use crate::threat::is_attacked;

/// Black-to-move successors: the eight king steps (§4.7). A step landing on
/// the white king's own square is rejected (the defender may not capture the
/// opposing king); otherwise every slot is translated by the negated step,
/// any slot that lands on the origin is captured, and the result must be
/// legal and not itself under attack (no moving into check).
///
/// Escape detection (whether a successor leaves the enumerated universe) is
/// the caller's concern: check [`State::in_bound`] against the scenario's
/// `bound` once the successor has been produced.
pub fn black_successors(
    state: &State,
    kinds: &[PieceKind],
    runs: &[Range<usize>],
    white_king_slot: Option<usize>,
) -> Vec<State> {
    let mut out = Vec::new();
    for &step in &KING_STEPS {
        if let Some(wk) = white_king_slot {
            if state.board.get(wk) == Some(step) {
                continue;
            }
        }

        let slots: Vec<Slot> = state
            .board
            .slots()
            .iter()
            .map(|s| s.map(|c| c - step))
            .map(|s| if s == Some(Coord::ORIGIN) { None } else { s })
            .collect();

        let board = canonicalize(&Board::new(slots), runs);
        if !is_legal(&board, white_king_slot) {
            continue;
        }
        if is_attacked(&board, kinds) {
            continue;
        }

        out.push(State::new(state.king + step, board));
    }
    out
}

/// White-to-move successors: the optional null move plus each present
/// piece's own successor boards, screened through the through-origin filter
/// (already applied inside [`piece_successor_boards`]), canonicalized, and
/// checked for legality (§4.8). The black king's absolute position never
/// changes on a white move.
pub fn white_successors(
    state: &State,
    kinds: &[PieceKind],
    runs: &[Range<usize>],
    white_king_slot: Option<usize>,
    m_prime: i32,
    allow_captures: bool,
    white_can_pass: bool,
) -> Vec<State> {
    let mut out = Vec::new();
    if white_can_pass {
        out.push(state.clone());
    }
    for (slot, &kind) in kinds.iter().enumerate() {
        for board in piece_successor_boards(&state.board, slot, kind, m_prime, allow_captures) {
            let board = canonicalize(&board, runs);
            if !is_legal(&board, white_king_slot) {
                continue;
            }
            out.push(State::new(state.king, board));
        }
    }
    out
}
