use lazy_static::lazy_static;
use pleco::core::masks::SQ_CNT;
use pleco::Piece;

pub type Value = i32;

//SEARCH WINDOW SENTINELS
//Far outside anything the evaluators can produce, so they only ever
//appear as alpha/beta initializers, never as a real score.
pub const INFINITE: Value = 999_999_999;
pub const NEG_INFINITE: Value = -999_999_999;

//PIECE EVALUATION CONSTANTS
pub const PAWN_VALUE: Value = 125;
pub const KNIGHT_VALUE: Value = 300;
pub const BISHOP_VALUE: Value = 300;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;
pub const KING_VALUE: Value = 100_000;

/// Piece values indexed by `PieceType as usize`
/// (None, P, N, B, R, Q, K, All).
pub const PIECE_VALUES: [Value; 8] = [
    0,
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
    0,
];

#[inline(always)]
pub fn piece_value(piece: Piece) -> Value {
    PIECE_VALUES[piece.type_of() as usize]
}

//EVALUATION WEIGHTS

/// Tempo loss for the side to move standing in check.
pub const CHECK_PENALTY: Value = 65;

/// Knight placement weight per Chebyshev ring from the board edge.
/// Ring 0 is the outer rim, ring 3 the four center squares.
pub const KNIGHT_RING_VALUES: [Value; 4] = [-50, -10, -25, 50];

//MOBILITY WEIGHTS (attack-square count * weight)
pub const PAWN_MOBILITY: Value = 3;
pub const KNIGHT_MOBILITY: Value = 4;
pub const SLIDER_MOBILITY: Value = 2;
pub const QUEEN_MOBILITY: Value = 1;

//SEARCH DEPTH BUDGET
pub const BASE_DEPTH: u8 = 3;
pub const LATE_DEPTH: u8 = 4;
pub const ENDGAME_DEPTH: u8 = 5;

pub const LATE_PIECE_COUNT: u8 = 12;
pub const ENDGAME_PIECE_COUNT: u8 = 5;

lazy_static! {
    /// Per-square knight placement bonus, A1..H8.
    pub static ref KNIGHT_RING_BONUS: [Value; SQ_CNT] = ring_table();
}

fn ring_table() -> [Value; SQ_CNT] {
    let mut table = [0; SQ_CNT];
    for sq in 0..SQ_CNT {
        let rank = sq / 8;
        let file = sq % 8;
        let ring = rank.min(7 - rank).min(file.min(7 - file));
        table[sq] = KNIGHT_RING_VALUES[ring];
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_table_corners_and_center() {
        // A1, H1, A8, H8 sit on the rim
        assert_eq!(KNIGHT_RING_BONUS[0], -50);
        assert_eq!(KNIGHT_RING_BONUS[7], -50);
        assert_eq!(KNIGHT_RING_BONUS[56], -50);
        assert_eq!(KNIGHT_RING_BONUS[63], -50);

        // D4/E4/D5/E5 are ring 3
        assert_eq!(KNIGHT_RING_BONUS[27], 50);
        assert_eq!(KNIGHT_RING_BONUS[28], 50);
        assert_eq!(KNIGHT_RING_BONUS[35], 50);
        assert_eq!(KNIGHT_RING_BONUS[36], 50);

        // B2 is ring 1, C3 ring 2
        assert_eq!(KNIGHT_RING_BONUS[9], -10);
        assert_eq!(KNIGHT_RING_BONUS[18], -25);
    }

    #[test]
    fn piece_values_ordered() {
        assert!(PAWN_VALUE < KNIGHT_VALUE);
        assert!(KNIGHT_VALUE <= BISHOP_VALUE);
        assert!(BISHOP_VALUE < ROOK_VALUE);
        assert!(ROOK_VALUE < QUEEN_VALUE);
        assert!(QUEEN_VALUE < KING_VALUE);
    }
}
