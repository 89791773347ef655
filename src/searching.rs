use std::time::Duration;

use pleco::{BitMove, Board, Player};

use crate::consts::{
    Value, BASE_DEPTH, ENDGAME_DEPTH, ENDGAME_PIECE_COUNT, INFINITE, LATE_DEPTH, LATE_PIECE_COUNT,
    NEG_INFINITE,
};
use crate::evaluation::{AdvancedEval, BasicEval, Evaluator};
use crate::ordering::order_moves;

const NULL_BIT_MOVE: BitMove = BitMove::null();

/// Bounded minimax searcher, generic over the static evaluation used at the
/// leaves. Holds the depth budget between turns so a game only ever gets
/// searched deeper as it simplifies, never shallower.
pub struct Searcher<E: Evaluator> {
    evaluator: E,
    depth: u8,
    // Recorded per call, not yet consulted: depth alone bounds the work.
    time_budget: Option<Duration>,
}

/// One-shot search with the full evaluation.
pub fn start_search(board: &mut Board, time_budget: Option<Duration>) -> BitMove {
    Searcher::new(AdvancedEval).find_best_move(board, time_budget)
}

/// One-shot search with the material-only evaluation.
pub fn start_basic_search(board: &mut Board, time_budget: Option<Duration>) -> BitMove {
    Searcher::new(BasicEval).find_best_move(board, time_budget)
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            depth: BASE_DEPTH,
            time_budget: None,
        }
    }

    /// Current depth budget.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Budget handed over with the last call. Accepted for the caller's
    /// sake; depth selection and pruning do not look at it yet.
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    /// Pick a move for the side to move. Refreshes the depth budget from
    /// the piece count, then runs the root search. The returned move is
    /// legal in `board` whenever any legal move exists; with none (mate or
    /// stalemate already on the board) the null move comes back.
    pub fn find_best_move(
        &mut self,
        board: &mut Board,
        time_budget: Option<Duration>,
    ) -> BitMove {
        self.time_budget = time_budget;
        self.depth = self.depth.max(select_depth(board.count_all_pieces()));
        self.search_root(board, self.depth)
    }

    /// One top-level decision: order the candidates, take a mate in one on
    /// the spot, otherwise score every candidate with `minimax` and keep
    /// the best for the side to move.
    pub fn search_root(&mut self, board: &mut Board, depth: u8) -> BitMove {
        let mut moves = board.generate_moves();
        if moves.is_empty() {
            return NULL_BIT_MOVE;
        }
        order_moves(board, &mut moves);

        let white_to_move = board.turn() == Player::White;

        let mut best_move = moves[0];
        let mut best_value = if white_to_move { NEG_INFINITE } else { INFINITE };

        for mv in moves.iter() {
            // A mate in one is never dominated by anything else.
            if mate_in_one(board, *mv) {
                return *mv;
            }

            board.apply_move(*mv);
            let value = self.minimax(board, depth, NEG_INFINITE, INFINITE, !white_to_move);
            board.undo_move();

            if (white_to_move && value > best_value) || (!white_to_move && value < best_value) {
                best_move = *mv;
                best_value = value;
            }
        }

        best_move
    }

    /// Alpha-beta minimax. Scores are white-centric; `maximizing` says
    /// whether this ply picks for White. It alternates with ply parity from
    /// the root call and is never re-read from the board. The board comes
    /// back exactly as it went in: every `apply_move` is undone before
    /// returning, cut-off or not.
    pub fn minimax(
        &self,
        board: &mut Board,
        depth: u8,
        mut alpha: Value,
        mut beta: Value,
        maximizing: bool,
    ) -> Value {
        if depth == 0 || board.checkmate() {
            return self.evaluator.evaluate(board);
        }

        let moves = board.generate_moves();
        if moves.is_empty() {
            // Stalemate: nothing to recurse into, score the position as it
            // stands.
            return self.evaluator.evaluate(board);
        }

        let mut eval;
        if maximizing {
            eval = NEG_INFINITE;
            for mv in moves.iter() {
                board.apply_move(*mv);
                eval = eval.max(self.minimax(board, depth - 1, alpha, beta, false));
                board.undo_move();

                alpha = alpha.max(eval);
                if beta <= alpha {
                    break; // Beta cut-off
                }
            }
        } else {
            eval = INFINITE;
            for mv in moves.iter() {
                board.apply_move(*mv);
                eval = eval.min(self.minimax(board, depth - 1, alpha, beta, true));
                board.undo_move();

                beta = beta.min(eval);
                if beta <= alpha {
                    break; // Alpha cut-off
                }
            }
        }

        eval
    }
}

/// One make/test/unmake: does this move deliver mate on the spot?
fn mate_in_one(board: &mut Board, mv: BitMove) -> bool {
    board.apply_move(mv);
    let mate = board.checkmate();
    board.undo_move();
    mate
}

/// Depth budget from the number of pieces still on the board. Simplified
/// positions branch less and get searched deeper.
pub fn select_depth(piece_count: u8) -> u8 {
    if piece_count < ENDGAME_PIECE_COUNT {
        ENDGAME_DEPTH
    } else if piece_count < LATE_PIECE_COUNT {
        LATE_DEPTH
    } else {
        BASE_DEPTH
    }
}
