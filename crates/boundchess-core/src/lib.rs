//! Core data model and algorithms for bounded infinite-chess endgame metrics:
//! coordinates, boards, canonicalization, legality, piece move generation,
//! the threat oracle, successor generation, and universe enumeration.
//!
//! Everything here is a total function over immutable inputs (§7): there is
//! no I/O, no configuration parsing, and no solver — those live in
//! `boundchess-engine` and `boundchess-cli`.

pub mod board;
pub mod canonical;
pub mod coord;
pub mod legality;
pub mod movegen;
pub mod piece;
pub mod scenario;
pub mod succ;
pub mod threat;
pub mod universe;

pub use board::{Board, Slot, State};
pub use canonical::canonicalize;
pub use coord::Coord;
pub use legality::is_legal;
pub use movegen::{crosses_origin, piece_successor_boards};
pub use piece::PieceKind;
pub use scenario::{Inventory, MoveBoundMode, Scenario, ScenarioError, identical_runs};
pub use succ::{black_successors, white_successors};
pub use threat::is_attacked;
pub use universe::enumerate_universe;
