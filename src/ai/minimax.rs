//! Depth-limited alpha-beta search that only proves forced wins and losses.
//!
//! There is no heuristic evaluation: positions at the depth limit are [Proof::Unknown],
//! so the result of a search is always one of three values.
use crate::board::{Board, Player};

/// The value of a position from the POV of the maximizing player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Proof {
    /// The minimizer can force a win within the search depth.
    Loss,
    /// Nothing was proven within the search depth.
    Unknown,
    /// The maximizer can force a win within the search depth.
    Win,
}

/// Search `board` up to `depth` moves deep, with `to_move` playing next.
///
/// The board is modified during the search but is restored before returning.
pub fn minimax(board: &mut Board, depth: u32, maximizer: Player, to_move: Player) -> Proof {
    alpha_beta(board, depth, Proof::Loss, Proof::Win, maximizer, to_move)
}

/// Alpha-beta minimax over the board in place.
///
/// Every move is undone with [Board::unput] before the next sibling is tried,
/// so the board is back in its original state whenever this returns.
fn alpha_beta(
    board: &mut Board,
    depth_left: u32,
    mut alpha: Proof,
    mut beta: Proof,
    maximizer: Player,
    current: Player,
) -> Proof {
    if depth_left == 0 {
        return Proof::Unknown;
    }

    // copy, unput can reorder the legal moves while we iterate
    let moves = board.legal_moves().to_vec();
    if moves.is_empty() {
        return Proof::Unknown;
    }

    let maximizing = current == maximizer;
    let mut best = if maximizing { Proof::Loss } else { Proof::Win };

    for mv in moves {
        let y = board.put(current, mv).expect("legal moves are never full");

        if board.caused_win(mv, y) {
            board.unput(mv);
            return if maximizing { Proof::Win } else { Proof::Loss };
        }

        let value = alpha_beta(board, depth_left - 1, alpha, beta, maximizer, current.other());
        board.unput(mv);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}
