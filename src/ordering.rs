use pleco::{BitMove, Board};

use crate::consts::{piece_value, Value};

/// MVV-LVA score for a single move: value of the victim on the destination
/// square minus value of the attacker. An empty destination counts as a
/// victim of value 0, so quiet moves score at or below zero.
pub fn capture_score(board: &Board, mv: BitMove) -> Value {
    let attacker = board.piece_at_sq(mv.get_src());
    let victim = board.piece_at_sq(mv.get_dest());

    piece_value(victim) - piece_value(attacker)
}

/// Sort candidates so the biggest expected material swings come first:
/// a pawn taking a queen sorts ahead of a queen taking a pawn. The sort is
/// stable, so equal-scoring moves keep their generation order. Ordering
/// never drops a move, it only steers exploration to improve pruning.
pub fn order_moves(board: &Board, moves: &mut [BitMove]) {
    moves.sort_by_key(|mv| -capture_score(board, *mv));
}

#[cfg(test)]
mod tests {
    use pleco::{BitMove, Board};

    use super::{capture_score, order_moves};

    // White to move: b4 pawn can take the a5 queen, h5 queen can take the
    // g6 pawn.
    const TWO_CAPTURES: &str = "4k3/8/6p1/q6Q/1P6/8/8/4K3 w - - 0 1";

    fn find_move(board: &Board, uci: &str) -> BitMove {
        board
            .generate_moves()
            .iter()
            .copied()
            .find(|mv| mv.to_string() == uci)
            .expect("move not legal in fixture")
    }

    #[test]
    fn pawn_takes_queen_outscores_queen_takes_pawn() {
        let board = Board::from_fen(TWO_CAPTURES).unwrap();

        let pawn_takes_queen = find_move(&board, "b4a5");
        let queen_takes_pawn = find_move(&board, "h5g6");

        assert_eq!(capture_score(&board, pawn_takes_queen), 900 - 125);
        assert_eq!(capture_score(&board, queen_takes_pawn), 125 - 900);
    }

    #[test]
    fn quiet_move_scores_attacker_negative() {
        let board = Board::start_pos();
        let quiet = find_move(&board, "e2e4");
        assert_eq!(capture_score(&board, quiet), -125);
    }

    #[test]
    fn big_swings_sort_first() {
        let board = Board::from_fen(TWO_CAPTURES).unwrap();

        let mut moves = board.generate_moves();
        order_moves(&board, &mut moves);

        assert_eq!(moves[0].to_string(), "b4a5");

        let pos_pxq = moves
            .iter()
            .position(|mv| mv.to_string() == "b4a5")
            .unwrap();
        let pos_qxp = moves
            .iter()
            .position(|mv| mv.to_string() == "h5g6")
            .unwrap();
        assert!(pos_pxq < pos_qxp);
    }
}
