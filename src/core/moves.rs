//! Legal move generation, honouring the zone rule (spec.md §4.3).

use super::position::Position;

/// Enumerates the legal moves in `position`, in ascending zone-then-cell
/// order. Returns an empty list if the meta-board is already decided for
/// either player — callers treat that as terminal and score via the meta
/// evaluation instead of recursing further.
pub fn generate_moves(position: &Position) -> Vec<usize> {
    if position.meta_is_terminal() {
        return Vec::new();
    }

    let zone = position.next_zone();
    let mut moves = Vec::with_capacity(9);

    let zones: &[u64] = if zone == 9 { &ALL_ZONES } else { std::slice::from_ref(&zone) };
    let decided = position.meta_us() | position.meta_them();

    for &z in zones {
        if zone == 9 && (decided >> z) & 1 == 1 {
            continue;
        }
        let occ = position.zone_occupancy(z);
        for c in 0..9u64 {
            if (occ >> c) & 1 == 0 {
                moves.push((9 * z + c) as usize);
            }
        }
    }

    moves
}

const ALL_ZONES: [u64; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_has_all_eighty_one_moves() {
        let moves = generate_moves(&Position::new());
        assert_eq!(moves.len(), 81);
        assert_eq!(moves, (0..81).collect::<Vec<_>>());
    }

    #[test]
    fn centre_cell_of_centre_zone_forces_zone_four_minus_that_cell() {
        let p = Position::new().play_move(40, true);
        let moves = generate_moves(&p);
        let expected: Vec<usize> = (36..45).filter(|&m| m != 40).collect();
        assert_eq!(moves, expected);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn terminal_meta_board_has_no_moves() {
        let p = Position {
            us: 0,
            them: 0,
            share: (9u64 << 54) | 0b111, // us has won zones 0,1,2: a meta top row
        };
        assert!(generate_moves(&p).is_empty());
    }

    #[test]
    fn every_move_targets_an_empty_cell_in_a_non_decided_zone() {
        let mut p = Position::new();
        let mut side = true;
        for _ in 0..10 {
            let moves = generate_moves(&p);
            if moves.is_empty() {
                break;
            }
            for &m in &moves {
                let z = (m / 9) as u64;
                let c = (m % 9) as u64;
                assert_eq!((p.zone_occupancy(z) >> c) & 1, 0);
                assert_eq!((p.meta_us() | p.meta_them()) >> z & 1, 0);
            }
            let mv = moves[0];
            p = p.play_move(mv, side);
            side = !side;
        }
    }

    #[test]
    fn forced_zone_seven_or_eight_is_read_from_share() {
        // Force next zone to 7; zone 7 has cell 0 occupied (by us, in the share halves).
        let p = Position {
            us: 0,
            them: 0,
            share: (7u64 << 54) | 0b1, // next zone 7, cell 0 occupied by the side to move
        };
        let moves = generate_moves(&p);
        let expected: Vec<usize> = (63..72).filter(|&m| m != 63).collect();
        assert_eq!(moves, expected);
    }
}
