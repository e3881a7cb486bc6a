//! The UTTT bitboard core: bit utilities, evaluation tables, position
//! representation, and move generation. Everything here is total on
//! well-formed positions — see `error` for the protocol-boundary error type.

pub(crate) mod bits;
pub(crate) mod error;
pub(crate) mod moves;
pub(crate) mod notation;
pub(crate) mod position;
pub(crate) mod tables;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        error::{EngineError, EngineErrorKind},
        moves::generate_moves,
        notation::{format_move, format_score, parse_move, ZONE_NAMES},
        position::Position,
        tables::{EVAL_LARGE, EVAL_SMALL},
    };

    pub use super::{NULL_MOVE, OUTCOME_DRAW, OUTCOME_LOSS, OUTCOME_WIN};
}

/// Sentinel move index denoting "no move" — used both for unused PV slots and
/// for the pass-equivalent in contexts that need one.
pub const NULL_MOVE: usize = 81;

pub const OUTCOME_WIN: i32 = 1_000_000;
pub const OUTCOME_LOSS: i32 = -1_000_000;
pub const OUTCOME_DRAW: i32 = 0;
