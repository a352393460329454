use crate::ai::minimax::{minimax, Proof};
use crate::ai::rollout::rollout_score;
use crate::ai::{select_by_score, Bot, BotError, MoveScore};
use crate::board::{Board, Player};

/// Bot that first tries to prove each move won or lost with a shallow [minimax] search,
/// and falls back to random rollouts like [crate::ai::simple::MonteCarloBot] for the moves
/// where nothing could be proven.
///
/// Moves that win immediately are scored like in the Monte Carlo bot, not as proven wins,
/// so the rollout budget should be large compared to the number of legal moves.
#[derive(Debug, Copy, Clone)]
pub struct HybridBot {
    rollouts: u64,
    depth: u32,
}

impl HybridBot {
    pub fn new(rollouts: u64, depth: u32) -> Self {
        HybridBot { rollouts, depth }
    }
}

impl Bot for HybridBot {
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<usize, BotError> {
        let depth = self.depth;

        select_by_score(board, mover, self.rollouts, |child, rollouts_per_move| {
            match minimax(child, depth, mover, mover.other()) {
                Proof::Win => MoveScore::ForcedWin,
                Proof::Loss => MoveScore::ForcedLoss,
                Proof::Unknown => MoveScore::Sampled(rollout_score(child, mover, rollouts_per_move)),
            }
        })
    }
}
