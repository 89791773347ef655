use pleco::{Board, PieceType, Player};

use crate::consts::{
    Value, BISHOP_VALUE, KING_VALUE, KNIGHT_RING_BONUS, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE,
    ROOK_VALUE,
};

mod advanced_eval;
mod basic_eval;

pub use advanced_eval::AdvancedEval;
pub use basic_eval::BasicEval;

/// Static evaluation of a position. White-centric: positive favors White,
/// negative favors Black, whoever is to move. Implementations must be
/// deterministic and must not mutate the board.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Value;
}

fn material_for(board: &Board, player: Player) -> Value {
    let count = |ptype| board.count_piece(player, ptype) as Value;

    count(PieceType::P) * PAWN_VALUE
        + count(PieceType::N) * KNIGHT_VALUE
        + count(PieceType::B) * BISHOP_VALUE
        + count(PieceType::R) * ROOK_VALUE
        + count(PieceType::Q) * QUEEN_VALUE
        + count(PieceType::K) * KING_VALUE
}

/// Raw material balance, White minus Black. The kings appear on both sides
/// of the subtraction and cancel out.
pub(crate) fn material(board: &Board) -> Value {
    material_for(board, Player::White) - material_for(board, Player::Black)
}

/// Knight placement term: each knight scores by how far it stands from the
/// board edge, rewarding centralized knights and punishing rim knights.
/// Returns 0 straight away when neither side has a knight left.
pub(crate) fn knight_placement(board: &Board) -> Value {
    let white_knights = board.piece_bb(Player::White, PieceType::N);
    let black_knights = board.piece_bb(Player::Black, PieceType::N);

    if (white_knights | black_knights).is_empty() {
        return 0;
    }

    let mut score = 0;
    for sq in white_knights {
        score += KNIGHT_RING_BONUS[sq.0 as usize];
    }
    for sq in black_knights {
        score -= KNIGHT_RING_BONUS[sq.0 as usize];
    }
    score
}
