use pleco::{Board, PieceType, Player};

use super::{knight_placement, material, Evaluator};
use crate::consts::{
    Value, CHECK_PENALTY, KNIGHT_MOBILITY, PAWN_MOBILITY, QUEEN_MOBILITY, SLIDER_MOBILITY,
};

/// Full evaluation: material and knight placement plus a weighted mobility
/// count and a tempo penalty for standing in check.
pub struct AdvancedEval;

impl Evaluator for AdvancedEval {
    fn evaluate(&self, board: &Board) -> Value {
        let mut score = material(board) + knight_placement(board) + mobility(board);

        if board.in_check() {
            score += match board.turn() {
                Player::White => -CHECK_PENALTY,
                Player::Black => CHECK_PENALTY,
            };
        }

        score
    }
}

const MOBILITY_PIECES: [(PieceType, Value); 5] = [
    (PieceType::P, PAWN_MOBILITY),
    (PieceType::N, KNIGHT_MOBILITY),
    (PieceType::B, SLIDER_MOBILITY),
    (PieceType::R, SLIDER_MOBILITY),
    (PieceType::Q, QUEEN_MOBILITY),
];

fn mobility_for(board: &Board, player: Player) -> Value {
    let mut sum = 0;

    for (ptype, weight) in MOBILITY_PIECES {
        for sq in board.piece_bb(player, ptype) {
            let attacks = board.attacks_from(ptype, sq, player);
            sum += attacks.count_bits() as Value * weight;
        }
    }

    sum
}

/// Attack-square counts weighted per piece type, White minus Black. Kings
/// are left out.
fn mobility(board: &Board) -> Value {
    mobility_for(board, Player::White) - mobility_for(board, Player::Black)
}
