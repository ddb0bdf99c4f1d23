//! Universe enumeration (§4.5): every canonical legal state whose absolute
//! footprint fits inside the scenario's bound.

use std::collections::HashSet;
use std::ops::Range;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::board::{Board, State};
use crate::canonical::canonicalize;
use crate::coord::Coord;
use crate::legality::is_legal;
use crate::piece::PieceKind;

/// Enumerate, in the deterministic order fixed by §4.5 — absolute king
/// squares iterated row by row, identical runs left to right, each run's
/// placements in lexicographic combination order — every canonical legal
/// state with footprint inside `bound`.
pub fn enumerate_universe(
    bound: i32,
    kinds: &[PieceKind],
    runs: &[Range<usize>],
    white_king_slot: Option<usize>,
    allow_captures: bool,
) -> Vec<State> {
    debug!(bound, pieces = kinds.len(), "enumerating universe");

    let abs_squares: Vec<Coord> = (-bound..=bound)
        .flat_map(|x| (-bound..=bound).map(move |y| Coord::new(x, y)))
        .collect();

    let mut out = Vec::new();
    for &abs_king in &abs_squares {
        let mut used: HashSet<Coord> = HashSet::new();
        used.insert(abs_king);
        let mut cur_abs: Vec<Option<Coord>> = vec![None; kinds.len()];
        place_run(PlaceCtx {
            abs_king,
            abs_squares: &abs_squares,
            kinds,
            runs,
            white_king_slot,
            allow_captures,
        }, 0, &mut used, &mut cur_abs, &mut out);
    }

    if out.is_empty() && !kinds.is_empty() {
        warn!(bound, pieces = kinds.len(), "universe is empty: inventory has no legal placement at this bound");
    }
    debug!(states = out.len(), "universe enumerated");
    out
}

struct PlaceCtx<'a> {
    abs_king: Coord,
    abs_squares: &'a [Coord],
    kinds: &'a [PieceKind],
    runs: &'a [Range<usize>],
    white_king_slot: Option<usize>,
    allow_captures: bool,
}

fn place_run(
    ctx: PlaceCtx<'_>,
    run_idx: usize,
    used: &mut HashSet<Coord>,
    cur_abs: &mut Vec<Option<Coord>>,
    out: &mut Vec<State>,
) {
    if run_idx == ctx.runs.len() {
        let rel: Vec<Option<Coord>> = cur_abs.iter().map(|c| c.map(|c| c - ctx.abs_king)).collect();
        let board = canonicalize(&Board::new(rel), ctx.runs);
        if is_legal(&board, ctx.white_king_slot) {
            out.push(State::new(ctx.abs_king, board));
        }
        return;
    }

    let run = ctx.runs[run_idx].clone();
    let kind = ctx.kinds[run.start];
    let run_len = run.len();
    let min_k = if ctx.allow_captures { 0 } else { run_len };

    for k in min_k..=run_len {
        let none_count = run_len - k;
        let available: Vec<Coord> = ctx
            .abs_squares
            .iter()
            .copied()
            .filter(|c| {
                if used.contains(c) {
                    return false;
                }
                if kind == PieceKind::WhiteKing && (*c - ctx.abs_king).chebyshev() <= 1 {
                    return false;
                }
                true
            })
            .collect();

        for chosen in available.iter().copied().combinations(k) {
            for &c in &chosen {
                used.insert(c);
            }

            let mut chosen_sorted = chosen.clone();
            chosen_sorted.sort();
            for offset in 0..run_len {
                let idx = run.start + offset;
                cur_abs[idx] = if offset < none_count {
                    None
                } else {
                    Some(chosen_sorted[offset - none_count])
                };
            }

            place_run(
                PlaceCtx {
                    abs_king: ctx.abs_king,
                    abs_squares: ctx.abs_squares,
                    kinds: ctx.kinds,
                    runs: ctx.runs,
                    white_king_slot: ctx.white_king_slot,
                    allow_captures: ctx.allow_captures,
                },
                run_idx + 1,
                used,
                cur_abs,
                out,
            );

            for &c in &chosen {
                used.remove(&c);
            }
        }
    }
}
