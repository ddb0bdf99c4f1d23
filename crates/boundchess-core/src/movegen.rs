//! Per-piece successor-board generation (§4.1) and the rider-through-king
//! filter (§4.2).

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::PieceKind;

/// `true` iff a sliding move's straight-line segment from `from` to `to`
/// passes through the origin as an intermediate square (§4.2). The origin
/// is the endpoint (destination), never a blocker in ordinary ray-stepping,
/// because the board representation never carries a slot for the black
/// king — a candidate that *lands on* the origin is instead rejected later
/// by the legality predicate, which forbids the origin from appearing in a
/// board at all.
pub fn crosses_origin(from: Coord, to: Coord) -> bool {
    if from.x == 0 && to.x == 0 && from.y != 0 && to.y != 0 {
        return signs_differ(from.y, to.y);
    }
    if from.y == 0 && to.y == 0 && from.x != 0 && to.x != 0 {
        return signs_differ(from.x, to.x);
    }
    if from.x == from.y && to.x == to.y && from.x != 0 && to.x != 0 {
        return signs_differ(from.x, to.x);
    }
    if from.x == -from.y && to.x == -to.y && from.x != 0 && to.x != 0 {
        return signs_differ(from.x, to.x);
    }
    false
}

fn signs_differ(a: i32, b: i32) -> bool {
    (a < 0 && b > 0) || (b < 0 && a > 0)
}

/// All resulting boards from moving the piece at `slot` (of kind `kind`),
/// given the effective move bound `m_prime` and whether landing on an
/// occupied slot captures it. Every other occupied slot belongs to the same
/// (attacker) side as the mover, so it is always a blocker; `allow_captures`
/// decides whether landing there is possible at all (and, if so, removes
/// the captured slot) or whether the mover simply cannot reach past it.
///
/// Canonicalization and the legality predicate are the caller's
/// responsibility (shared with black's own move generation in `succ`), so
/// a returned board may still need both before it is a valid [`State`]
/// component.
///
/// [`State`]: crate::board::State
pub fn piece_successor_boards(
    board: &Board,
    slot: usize,
    kind: PieceKind,
    m_prime: i32,
    allow_captures: bool,
) -> Vec<Board> {
    let Some(from) = board.get(slot) else {
        return Vec::new(); // a captured piece has nothing to move
    };

    let mut out = Vec::new();

    if kind.is_rider() {
        for ray in kind.rays(m_prime) {
            for offset in ray {
                let to = from + offset;
                if crosses_origin(from, to) {
                    // Every farther square on this ray is also past the
                    // origin (monotone in distance), so the whole ray is
                    // blocked from here on.
                    break;
                }
                match board.slot_at(to) {
                    None => out.push(board.with_slot(slot, Some(to))),
                    Some(occupied) => {
                        if allow_captures {
                            out.push(board.with_slot(slot, Some(to)).with_slot(occupied, None));
                        }
                        break;
                    }
                }
            }
        }
    } else {
        for &offset in kind.leap_offsets() {
            let to = from + offset;
            match board.slot_at(to) {
                None => out.push(board.with_slot(slot, Some(to))),
                Some(occupied) => {
                    if allow_captures {
                        out.push(board.with_slot(slot, Some(to)).with_slot(occupied, None));
                    }
                }
            }
        }
    }

    out
}
