use std::fmt::Debug;

use rayon::prelude::*;
use tracing::debug;

use crate::board::{Board, Player};

pub mod hybrid;
pub mod minimax;
pub mod rollout;
pub mod simple;

/// Default total number of rollouts per decision, shared by all candidate moves.
pub const DEFAULT_ROLLOUTS: u64 = 8000;

/// Default depth for the forced win/loss search of [hybrid::HybridBot].
pub const DEFAULT_DEPTH: u32 = 5;

/// Errors a [Bot] can return instead of a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum BotError {
    #[error("no legal moves available")]
    NoLegalMoves,
}

pub trait Bot: Debug {
    /// Pick a column for `mover` to play on `board`.
    ///
    /// The returned column is always one of `board.legal_moves()`.
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<usize, BotError>;
}

impl<B: Bot + ?Sized> Bot for Box<B> {
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<usize, BotError> {
        (**self).select_move(board, mover)
    }
}

/// The score of a candidate move, from the POV of the player making it.
///
/// Proven results always beat sampled ones, so the derived ordering is
/// `ForcedLoss < Sampled(_) < ForcedWin`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MoveScore {
    ForcedLoss,
    Sampled(i64),
    ForcedWin,
}

/// Pick the move with the highest score.
///
/// Ties go to the _last_ move with the best score in the order given.
/// Returns `None` if there are no moves.
pub fn select_best(moves: &[usize], scores: &[MoveScore]) -> Option<usize> {
    assert_eq!(moves.len(), scores.len());

    let mut best: Option<(usize, MoveScore)> = None;
    for (&mv, &score) in moves.iter().zip(scores) {
        if best.map_or(true, |(_, best_score)| score >= best_score) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// Score every legal move of `mover` in parallel and pick the best one with [select_best].
///
/// Each move is played on its own clone of `board`. Moves that win immediately get the full
/// per-move rollout budget as score, moves that fill the board get zero, and all other moves are
/// scored by `eval`, which gets the clone with the move applied and the per-move rollout budget.
pub(crate) fn select_by_score(
    board: &Board,
    mover: Player,
    rollouts: u64,
    eval: impl Fn(&mut Board, u64) -> MoveScore + Sync,
) -> Result<usize, BotError> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(BotError::NoLegalMoves);
    }

    let rollouts_per_move = rollouts / moves.len() as u64;

    let scores: Vec<MoveScore> = moves
        .par_iter()
        .map(|&mv| {
            let mut child = board.clone();
            let y = child.put(mover, mv).expect("legal moves are never full");

            if child.caused_win(mv, y) {
                MoveScore::Sampled(rollouts_per_move as i64)
            } else if child.is_full() {
                MoveScore::Sampled(0)
            } else {
                eval(&mut child, rollouts_per_move)
            }
        })
        .collect();

    for (mv, score) in moves.iter().zip(&scores) {
        debug!(?mover, mv, ?score, "scored move");
    }

    let best = select_best(moves, &scores).ok_or(BotError::NoLegalMoves)?;
    debug!(?mover, best, "selected move");
    Ok(best)
}
