//! Board and state representation (§3).
//!
//! A [`Board`] holds one slot per inventory piece, in the fixed canonical
//! order (white king, then queens, rooks, bishops, knights). A slot is
//! either a coordinate relative to the black king, or `None` if that piece
//! has been captured. The black king itself never appears in a `Board`: it
//! is the implicit occupant of the origin.

use std::fmt;

use crate::coord::Coord;

/// One inventory piece's position, relative to the black king; `None` if captured.
pub type Slot = Option<Coord>;

/// King-relative piece placement for every inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board(Vec<Slot>);

impl Board {
    pub fn new(slots: Vec<Slot>) -> Board {
        Board(slots)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Slot {
        self.0[index]
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Return a copy of this board with slot `index` replaced.
    pub fn with_slot(&self, index: usize, value: Slot) -> Board {
        let mut slots = self.0.clone();
        slots[index] = value;
        Board(slots)
    }

    /// Iterate over the coordinates of present (non-captured) pieces.
    pub fn present_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.0.iter().filter_map(|s| *s)
    }

    /// Index of the slot holding coordinate `c`, if any present slot does.
    pub fn slot_at(&self, c: Coord) -> Option<usize> {
        self.0.iter().position(|s| *s == Some(c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(c) => write!(f, "{c}")?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}

/// A single universe member: the black king's absolute position plus the
/// king-relative placement of every inventory piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    /// Absolute position of the black king.
    pub king: Coord,
    /// King-relative positions of the attacker inventory.
    pub board: Board,
}

impl State {
    pub fn new(king: Coord, board: Board) -> State {
        State { king, board }
    }

    /// Absolute position of the piece in `slot`, if present.
    pub fn absolute(&self, slot: usize) -> Option<Coord> {
        self.board.get(slot).map(|rel| self.king + rel)
    }

    /// `true` iff every piece (and the king) sits within Chebyshev distance
    /// `bound` of the absolute origin — i.e. this state is a member of the
    /// enumerated universe for that bound (§3, §4.7 "Escape detection").
    pub fn in_bound(&self, bound: i32) -> bool {
        if self.king.chebyshev() > bound {
            return false;
        }
        self.board
            .present_coords()
            .all(|rel| (self.king + rel).chebyshev() <= bound)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "king={} board={}", self.king, self.board)
    }
}
