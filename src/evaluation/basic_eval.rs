use pleco::Board;

use super::{knight_placement, material, Evaluator};
use crate::consts::Value;

/// Material-and-placement evaluation: piece values plus the knight ring
/// term, nothing else. Cheap enough to run at every leaf.
pub struct BasicEval;

impl Evaluator for BasicEval {
    fn evaluate(&self, board: &Board) -> Value {
        material(board) + knight_placement(board)
    }
}
