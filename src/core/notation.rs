//! Human-readable move and score notation (spec.md §6).

use regex::Regex;
use std::sync::OnceLock;

use super::error::{EngineError, EngineErrorKind};
use super::{NULL_MOVE, OUTCOME_LOSS, OUTCOME_WIN};
use crate::utils::prelude::*;

pub const ZONE_NAMES: [&str; 9] = ["NW", "N", "NE", "W", "C", "E", "SW", "S", "SE"];

/// Renders a move index as `"<big>/<small>"`, with the big zone spelled out
/// by name and the small cell given numerically. `NULL_MOVE` renders as `"-"`.
pub fn format_move(m: usize) -> String {
    if m == NULL_MOVE {
        return "-".to_owned();
    }
    format!("{}/{}", ZONE_NAMES[m / 9], m % 9)
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?P<big>[A-Z]{1,2})/(?P<small>[0-8])$").unwrap())
}

/// Parses a move rendered by `format_move` back into its index. Rejects
/// anything else — including `"-"` — as a `ParseFailure`, since a null move
/// is never a legal value to `play_move`.
pub fn parse_move(s: &str) -> Result<usize> {
    let captures = pattern()
        .captures(s)
        .ok_or_else(|| EngineError::new(EngineErrorKind::ParseFailure, format!("not a move: {s}")))?;

    let big_name = &captures["big"];
    let big = ZONE_NAMES
        .iter()
        .position(|&name| name == big_name)
        .ok_or_else(|| EngineError::new(EngineErrorKind::ParseFailure, format!("unknown zone {big_name}")))?;
    let small = captures["small"].parse::<usize>().unwrap();

    Ok(9 * big + small)
}

/// Renders a score as `D0`, `W<k>`/`L<k>` for a detected mate in `k` plies, or
/// `+n`/`-n` otherwise.
pub fn format_score(score: i32) -> String {
    if score == 0 {
        return "D0".to_owned();
    }
    if score > OUTCOME_WIN - 1000 {
        return format!("W{}", OUTCOME_WIN - score);
    }
    if score < OUTCOME_LOSS + 1000 {
        return format!("L{}", score - OUTCOME_LOSS);
    }
    if score > 0 {
        format!("+{score}")
    } else {
        format!("{score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_centre_cell_of_the_centre_zone() {
        assert_eq!(format_move(40), "C/4");
    }

    #[test]
    fn formats_null_move_as_dash() {
        assert_eq!(format_move(NULL_MOVE), "-");
    }

    #[test]
    fn parses_what_it_formats() {
        for m in (0..81).step_by(7) {
            assert_eq!(parse_move(&format_move(m)).unwrap(), m);
        }
    }

    #[test]
    fn rejects_unknown_zone_names() {
        assert!(parse_move("ZZ/0").is_err());
        assert!(parse_move("nw/0").is_err());
        assert!(parse_move("NW/9").is_err());
        assert!(parse_move("garbage").is_err());
    }

    #[test]
    fn draw_renders_as_d0() {
        assert_eq!(format_score(0), "D0");
    }

    #[test]
    fn a_win_in_two_plies_renders_as_w2() {
        assert_eq!(format_score(OUTCOME_WIN - 2), "W2");
    }

    #[test]
    fn a_loss_in_three_plies_renders_as_l3() {
        assert_eq!(format_score(OUTCOME_LOSS + 3), "L3");
    }

    #[test]
    fn ordinary_scores_carry_an_explicit_sign() {
        assert_eq!(format_score(42), "+42");
        assert_eq!(format_score(-42), "-42");
    }
}
