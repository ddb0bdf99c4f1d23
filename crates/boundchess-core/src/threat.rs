//! The threat oracle (§4.6): does any attacker piece attack the origin?

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::PieceKind;

/// `true` iff some present piece in `board` attacks the origin. Captures are
/// irrelevant here — the origin's sole occupant is the defending king, never
/// another attacker slot — and the through-origin filter is vacuous: the
/// origin is always the ray's endpoint here, never an intermediate square.
///
/// Unlike move generation, this is never bounded by the scenario's move
/// bound: a rider on an open, unblocked ray threatens the origin no matter
/// how far away it sits — only an intervening slot stops it.
pub fn is_attacked(board: &Board, kinds: &[PieceKind]) -> bool {
    kinds
        .iter()
        .enumerate()
        .any(|(slot, &kind)| match board.get(slot) {
            Some(pos) => attacks_origin(board, pos, kind),
            None => false,
        })
}

fn attacks_origin(board: &Board, pos: Coord, kind: PieceKind) -> bool {
    if kind.is_rider() {
        match ray_step_toward_origin(pos, kind) {
            Some(step) => {
                let mut square = pos;
                loop {
                    square = square + step;
                    if square.is_origin() {
                        return true;
                    }
                    if board.slot_at(square).is_some() {
                        return false; // a nearer piece blocks the rest of this ray
                    }
                }
            }
            None => false,
        }
    } else {
        kind.leap_offsets().iter().any(|&offset| pos + offset == Coord::ORIGIN)
    }
}

/// The single unit step from `pos` toward the origin along one of `kind`'s
/// ray axes, or `None` if `pos` doesn't lie on any axis `kind` slides along.
/// `pos` is never the origin itself (board invariant), and the rook-aligned
/// and bishop-aligned cases are mutually exclusive for any such `pos`, so
/// there is never more than one candidate axis to choose between.
fn ray_step_toward_origin(pos: Coord, kind: PieceKind) -> Option<Coord> {
    let rook_aligned = pos.x == 0 || pos.y == 0;
    let bishop_aligned = pos.x.abs() == pos.y.abs();
    let aligned = match kind {
        PieceKind::Rook => rook_aligned,
        PieceKind::Bishop => bishop_aligned,
        PieceKind::Queen => rook_aligned || bishop_aligned,
        _ => false,
    };
    aligned.then(|| Coord::new(-pos.x.signum(), -pos.y.signum()))
}
