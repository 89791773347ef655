use std::io::{self, BufRead, Write};
use std::time::Duration;

use bot_lib::evaluation::AdvancedEval;
use bot_lib::searching::Searcher;
use pleco::Board;

const TURN_BUDGET: Duration = Duration::from_secs(1);

/// Reads one FEN per line on stdin and answers with the chosen move.
/// Feed it the running game's positions turn by turn; it keeps one searcher
/// alive so the depth budget carries across turns.
fn main() {
    let stdin = io::stdin();
    let mut searcher = Searcher::new(AdvancedEval);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let fen = line.trim();
        if fen.is_empty() || fen == "quit" {
            break;
        }

        let mut board = match Board::from_fen(fen) {
            Ok(board) => board,
            Err(err) => {
                println!("bad fen: {:?}", err);
                continue;
            }
        };

        let mv = searcher.find_best_move(&mut board, Some(TURN_BUDGET));
        if mv.is_null() {
            println!("(none)");
        } else {
            println!("{mv}");
        }
        io::stdout().flush().ok();
    }
}
