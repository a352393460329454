//! Random playouts used to estimate the value of a position.
use rand::thread_rng;
use tracing::trace;

use crate::ai::simple::RandomBot;
use crate::board::{Board, Player};
use crate::game::Game;
use crate::pov::NonPov;

/// Play `count` random games from `position`, with the opponent of `mover` to play first,
/// and return the sum of the results from the POV of `mover`: `+1` for a win, `-1` for a loss
/// and `0` for a draw.
///
/// `position` must not be finished yet. The random bots use the thread-local rng,
/// so this can safely be called from multiple threads at once.
pub fn rollout_score(position: &Board, mover: Player, count: u64) -> i64 {
    let mut game = Game::new(
        position.clone(),
        RandomBot::new(thread_rng()),
        RandomBot::new(thread_rng()),
    );

    let mut score = 0;
    for _ in 0..count {
        game.restart(position.clone(), mover.other());
        // random bots only pick legal moves and the position is not finished, so this can't fail
        let outcome = game.play_out().expect("random rollout failed");
        score += outcome.pov(mover).sign::<i64>();
    }

    trace!(?mover, count, score, "finished rollouts");
    score
}
