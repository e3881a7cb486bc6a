//! Precomputed per-sub-board evaluation tables.
//!
//! `EVAL_LARGE` and `EVAL_SMALL` are indexed by `(them << 9) | us`, each
//! operand a 9-bit cell pattern of a single 3x3 grid, and are built once,
//! lazily, behind a `OnceLock` — the same idiom the teacher repo uses for its
//! Zobrist tables (`board/zobrist.rs`), so that tests exercising only move
//! generation never pay the ~262k-pair precompute cost.

use std::sync::OnceLock;

use super::bits::{lines, popcount};
use super::{OUTCOME_DRAW, OUTCOME_LOSS, OUTCOME_WIN};

const TABLE_LEN: usize = 512 * 512;

const BIG_TWO_COUNT: i32 = 90;
const BIG_ONE_COUNT: i32 = 20;
const SMALL_TWO_COUNT: i32 = 8;
const SMALL_ONE_COUNT: i32 = 1;

const CORNER: i32 = 7;
const EDGE: i32 = 5;
const CENTRE: i32 = 9;
const SQ_BIG: i32 = 25;

const CORNER_MASK: u32 = 0b101_000_101;
const EDGE_MASK: u32 = 0b010_101_010;
const CENTRE_MASK: u32 = 0b000_010_000;

pub(crate) struct TableSet {
    pub large: Vec<i32>,
    pub small: Vec<i32>,
}

static TABLES: OnceLock<TableSet> = OnceLock::new();

fn build_tables() -> TableSet {
    let mut large = vec![0i32; TABLE_LEN];
    let mut small = vec![0i32; TABLE_LEN];

    for us in 0u32..512 {
        for them in 0u32..512 {
            let us_lines = lines(us);
            let them_lines = lines(them);

            let mut us_won = false;
            let mut them_won = false;
            let mut eval_large = 0i32;
            let mut eval_small = 0i32;

            for slot in 0..8 {
                let us_count = (us_lines >> (3 * slot)) & 0b111;
                let them_count = (them_lines >> (3 * slot)) & 0b111;

                if us_count != 0 && them_count != 0 {
                    continue;
                }
                if us_count == 3 {
                    us_won = true;
                    break;
                }
                if them_count == 3 {
                    them_won = true;
                    break;
                }

                eval_large += match us_count {
                    2 => BIG_TWO_COUNT,
                    1 => BIG_ONE_COUNT,
                    _ => 0,
                } - match them_count {
                    2 => BIG_TWO_COUNT,
                    1 => BIG_ONE_COUNT,
                    _ => 0,
                };
                eval_small += match us_count {
                    2 => SMALL_TWO_COUNT,
                    1 => SMALL_ONE_COUNT,
                    _ => 0,
                } - match them_count {
                    2 => SMALL_TWO_COUNT,
                    1 => SMALL_ONE_COUNT,
                    _ => 0,
                };
            }

            let pos = CORNER * (popcount(us & CORNER_MASK) as i32 - popcount(them & CORNER_MASK) as i32)
                + EDGE * (popcount(us & EDGE_MASK) as i32 - popcount(them & EDGE_MASK) as i32)
                + CENTRE * (popcount(us & CENTRE_MASK) as i32 - popcount(them & CENTRE_MASK) as i32);

            let index = ((them << 9) | us) as usize;
            if us_won {
                large[index] = OUTCOME_WIN;
            } else if them_won {
                large[index] = OUTCOME_LOSS;
            } else if popcount(us | them) == 9 {
                large[index] = OUTCOME_DRAW;
            } else {
                large[index] = eval_large + pos * SQ_BIG;
                small[index] = eval_small + pos;
            }
        }
    }

    TableSet { large, small }
}

fn tables() -> &'static TableSet {
    TABLES.get_or_init(build_tables)
}

/// `EVAL_LARGE[(them << 9) | us]`: the meta-board-context value of a 3x3 pair.
pub fn eval_large(us: u32, them: u32) -> i32 {
    tables().large[((them << 9) | us) as usize]
}

/// `EVAL_SMALL[(them << 9) | us]`: the sub-board-interior value of a 3x3 pair.
pub fn eval_small(us: u32, them: u32) -> i32 {
    tables().small[((them << 9) | us) as usize]
}

/// Named re-exports matching spec.md's `EVAL_LARGE`/`EVAL_SMALL` vocabulary,
/// for readers coming from the specification rather than the source.
pub const EVAL_LARGE: fn(u32, u32) -> i32 = eval_large;
pub const EVAL_SMALL: fn(u32, u32) -> i32 = eval_small;
