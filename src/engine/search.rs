//! Negamax alpha-beta search, fail-hard within the given window (spec.md
//! §4.6). No transposition table, no iterative deepening, no move ordering
//! heuristics, no threading — the Non-goals this engine deliberately leaves
//! to a future engine, not this one.

use crate::core::prelude::*;
use crate::engine::evaluator::evaluate;

/// The result of a root search: a score (fail-hard, clamped to
/// `[-OUTCOME_WIN, OUTCOME_WIN]`) and a principal variation of exactly
/// `depth` entries, unused trailing slots holding `NULL_MOVE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub pv: Vec<usize>,
}

/// Adjusts a terminal score toward the root so that shorter forced wins and
/// longer forced losses are preferred over equally-terminal alternatives.
fn mate_adjusted(score: i32, depth: usize, max_depth: usize) -> i32 {
    if score == OUTCOME_WIN {
        OUTCOME_WIN - (max_depth - depth) as i32
    } else if score == OUTCOME_LOSS {
        OUTCOME_LOSS + (max_depth - depth) as i32
    } else {
        score
    }
}

/// Recursive fail-hard negamax alpha-beta. `depth` counts down from
/// `max_depth` to `0`; the PV this returns always has exactly `max_depth`
/// entries.
fn alpha_beta(
    position: &Position,
    side: bool,
    depth: usize,
    mut alpha: i32,
    beta: i32,
    max_depth: usize,
) -> SearchResult {
    if depth == 0 {
        let score = mate_adjusted(evaluate(position, side), depth, max_depth);
        return SearchResult { score, pv: vec![NULL_MOVE; max_depth] };
    }

    let moves = generate_moves(position);
    if moves.is_empty() {
        let meta_score = EVAL_LARGE(position.meta_us() as u32, position.meta_them() as u32);
        let meta_score = if side { meta_score } else { -meta_score };
        let score = if meta_score == OUTCOME_WIN || meta_score == OUTCOME_LOSS {
            mate_adjusted(meta_score, depth, max_depth)
        } else {
            // No moves but not a mate: per spec.md §9's open question, this is
            // scored as a flat draw, not the meta heuristic. Preserved for
            // parity with the source this spec was distilled from; a
            // no-moves position that isn't a meta-board line is, by this
            // game's rules, a fully-decided (drawn) meta-board, so the two
            // readings coincide in practice.
            OUTCOME_DRAW
        };
        return SearchResult { score, pv: vec![NULL_MOVE; max_depth] };
    }

    let mut pv = vec![NULL_MOVE; max_depth];
    for &m in &moves {
        let child = position.play_move(m, side);
        let mut result = alpha_beta(&child, !side, depth - 1, -beta, -alpha, max_depth);
        result.score = -result.score;

        result.pv[max_depth - depth] = m;

        if result.score >= beta {
            return SearchResult { score: beta, pv: result.pv };
        }
        if result.score > alpha {
            alpha = result.score;
            pv = result.pv;
        }
    }

    SearchResult { score: alpha, pv }
}

/// `alphaBetaRootCall` from spec.md §4.6/§6: searches to exactly `depth`
/// plies and returns the best score plus a full-length PV.
pub fn alpha_beta_root_call(position: &Position, side: bool, depth: usize) -> SearchResult {
    alpha_beta(position, side, depth, -OUTCOME_WIN, OUTCOME_WIN, depth)
}
