//! Two simple bots: `RandomBot` and `MonteCarloBot`.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::rollout::rollout_score;
use crate::ai::{select_by_score, Bot, BotError, MoveScore};
use crate::board::{Board, Player};

/// Bot that chooses moves randomly uniformly among the legal moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &Board, _: Player) -> Result<usize, BotError> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(BotError::NoLegalMoves)
    }
}

/// Bot that chooses moves after simulating random games for each of them.
///
/// The same number of simulations `rollouts / nb_moves` is done for each move,
/// and the move with the best total score is selected. Moves are evaluated in parallel.
///
/// A move that wins immediately scores `rollouts / nb_moves`, the same as a move whose rollouts
/// were all won. With a small budget other moves can tie with it, and ties go to the last
/// legal move, so a budget of fewer rollouts than legal moves does not reliably take a win.
#[derive(Debug, Copy, Clone)]
pub struct MonteCarloBot {
    rollouts: u64,
}

impl MonteCarloBot {
    pub fn new(rollouts: u64) -> Self {
        MonteCarloBot { rollouts }
    }
}

impl Bot for MonteCarloBot {
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<usize, BotError> {
        select_by_score(board, mover, self.rollouts, |child, rollouts_per_move| {
            MoveScore::Sampled(rollout_score(child, mover, rollouts_per_move))
        })
    }
}
