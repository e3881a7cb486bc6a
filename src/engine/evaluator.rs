//! The static evaluator (spec.md §4.5).

use crate::core::prelude::*;

/// Scores `position` from `side`'s perspective: positive is good for `side`.
///
/// Sign convention everywhere in this crate is "positive is good for X" (the
/// `side == true` perspective); this function, and only this function, flips
/// that into the caller's requested perspective. The search flips it again at
/// every recursion level to implement negamax.
pub fn evaluate(position: &Position, side: bool) -> i32 {
    let meta_us = position.meta_us() as u32;
    let meta_them = position.meta_them() as u32;

    let meta_score = EVAL_LARGE(meta_us, meta_them);
    if meta_score == OUTCOME_WIN || meta_score == OUTCOME_LOSS {
        return if side { meta_score } else { -meta_score };
    }
    if meta_us | meta_them == 0x1FF {
        return OUTCOME_DRAW;
    }

    let mut evaluation = meta_score;
    let decided = meta_us | meta_them;
    for z in 0..9u64 {
        if (decided >> z) & 1 == 1 {
            continue;
        }
        let us_slice = position.zone_us(z) as u32;
        let them_slice = position.zone_them(z) as u32;
        if us_slice | them_slice == 0x1FF {
            continue;
        }
        evaluation += EVAL_SMALL(us_slice, them_slice);
    }

    if side {
        evaluation
    } else {
        -evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_is_exactly_symmetric() {
        let p = Position::new();
        assert_eq!(evaluate(&p, true), -evaluate(&p, false));
        assert_eq!(evaluate(&p, true), 0);
    }

    #[test]
    fn evaluate_is_antisymmetric_in_side_for_any_position() {
        let mut p = Position::new();
        let mut side = true;
        for m in [40, 36, 0, 10, 1] {
            assert_eq!(evaluate(&p, true), -evaluate(&p, false));
            p = p.play_move(m, side);
            side = !side;
        }
    }

    #[test]
    fn a_won_meta_board_scores_as_a_win_for_the_winner() {
        let p = Position {
            us: 0,
            them: 0,
            share: (9u64 << 54) | 0b111, // us has won the top meta row
        };
        assert_eq!(evaluate(&p, true), OUTCOME_WIN);
        assert_eq!(evaluate(&p, false), OUTCOME_LOSS);
    }

    #[test]
    fn fully_decided_meta_board_with_no_line_is_a_draw() {
        // every zone decided between us and them, no meta line for either
        // (us holds cells {0,1,5,6,7}, them the rest; neither is collinear).
        let us_meta = 0b011_100_011u64;
        let them_meta = 0x1FF & !us_meta;
        let p = Position {
            us: 0,
            them: 0,
            share: (9u64 << 54) | (us_meta << 36) | (them_meta << 45),
        };
        assert_eq!(evaluate(&p, true), OUTCOME_DRAW);
        assert_eq!(evaluate(&p, false), OUTCOME_DRAW);
    }
}
