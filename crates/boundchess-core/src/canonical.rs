//! Canonicalization of intra-run piece permutations (§4.3).

use std::ops::Range;

use crate::board::Board;

/// Rewrite each identical run so absent slots come first and present
/// coordinates follow in lexicographic `(x, y)` order (§3, §4.3). This is
/// the unique representative within the orbit of intra-run permutations and
/// is idempotent: `canonicalize(canonicalize(b, runs), runs) == canonicalize(b, runs)`.
pub fn canonicalize(board: &Board, runs: &[Range<usize>]) -> Board {
    let mut slots = board.slots().to_vec();
    for run in runs {
        let mut run_slots: Vec<_> = slots[run.clone()].to_vec();
        run_slots.sort_by_key(|s| match s {
            None => (0, 0, 0),
            Some(c) => (1, c.x, c.y),
        });
        slots[run.clone()].copy_from_slice(&run_slots);
    }
    Board::new(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    #[test]
    fn sorts_absent_first_then_lexicographic() {
        let board = Board::new(vec![
            Some(Coord::new(2, -1)),
            None,
            Some(Coord::new(-3, 5)),
        ]);
        let canon = canonicalize(&board, &[0..3]);
        assert_eq!(
            canon.slots(),
            &[None, Some(Coord::new(-3, 5)), Some(Coord::new(2, -1))]
        );
    }

    #[test]
    fn independent_runs_canonicalize_separately() {
        let board = Board::new(vec![
            Some(Coord::new(1, 1)),
            None,
            Some(Coord::new(0, 5)),
            Some(Coord::new(-2, -2)),
        ]);
        let canon = canonicalize(&board, &[0..2, 2..4]);
        assert_eq!(canon.get(0), None);
        assert_eq!(canon.get(1), Some(Coord::new(1, 1)));
        assert_eq!(canon.get(2), Some(Coord::new(-2, -2)));
        assert_eq!(canon.get(3), Some(Coord::new(0, 5)));
    }

    #[test]
    fn idempotent() {
        let board = Board::new(vec![Some(Coord::new(3, 3)), Some(Coord::new(-1, -1)), None]);
        let runs = [0..3];
        let once = canonicalize(&board, &runs);
        let twice = canonicalize(&once, &runs);
        assert_eq!(once, twice);
    }

    #[test]
    fn single_slot_run_is_unchanged() {
        let board = Board::new(vec![Some(Coord::new(4, 4))]);
        let canon = canonicalize(&board, &[0..1]);
        assert_eq!(canon, board);
    }
}
