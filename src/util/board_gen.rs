//! Utilities to generate a `Board` in a specific or random state.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::minimax::{minimax, Proof};
use crate::board::{Board, Player, LINE};

/// Play the given columns on `start`, alternating players and starting with `first`.
pub fn board_with_moves(start: Board, first: Player, moves: &[usize]) -> Board {
    let mut curr = start;
    let mut player = first;

    for &mv in moves {
        assert!(curr.winner().is_none(), "Board already won, playing {} on\n{}", mv, curr);
        assert!(
            mv < curr.width() && !curr.is_column_full(mv),
            "Move not available, playing {} on\n{}",
            mv,
            curr
        );
        curr.put(player, mv);
        player = player.other();
    }

    curr
}

/// A board generated by random play, together with the player to move next.
#[derive(Debug, Clone)]
pub struct RandomBoard {
    pub board: Board,
    pub next_player: Player,
    /// The `(column, row)` of the last stone played, `None` if no moves were played.
    pub last_move: Option<(usize, usize)>,
}

/// Generate a `Board` by playing `n` random moves on `start`, starting with `first`.
///
/// Only the last of those moves is allowed to end the game, so `start` must not be finished
/// unless `n` is zero.
pub fn random_board_with_moves(start: &Board, first: Player, n: u32, rng: &mut impl Rng) -> RandomBoard {
    assert!(
        n == 0 || !start.is_game_over(),
        "Cannot play {} moves on a finished board\n{}",
        n,
        start
    );
    assert!(
        (n as usize) <= start.width() * start.height(),
        "Cannot play {} moves on a {}x{} board",
        n,
        start.width(),
        start.height()
    );

    'new_try: loop {
        let mut board = start.clone();
        let mut player = first;
        let mut last_move = None;

        for i in 0..n {
            if i != 0 && board.is_game_over() {
                continue 'new_try;
            }
            let mv = match board.legal_moves().choose(rng) {
                Some(&mv) => mv,
                None => continue 'new_try,
            };
            let y = board.put(player, mv).expect("legal moves are never full");

            last_move = Some((mv, y));
            player = player.other();
        }

        return RandomBoard {
            board,
            next_player: player,
            last_move,
        };
    }
}

/// Generate an unfinished `Board` by playing random moves on `start` until the player to move
/// has a win within `depth` moves, as proven by [minimax].
///
/// This keeps retrying until such a board is found, so it never returns if no forced win is
/// reachable from `start`. Boards too small to fit a line and finished boards are rejected up front.
pub fn random_board_with_forced_win(start: &Board, first: Player, depth: u32, rng: &mut impl Rng) -> RandomBoard {
    assert!(depth > 0, "A forced win needs at least one move");
    assert!(
        start.width() >= LINE || start.height() >= LINE,
        "No line fits on a {}x{} board",
        start.width(),
        start.height()
    );
    assert!(!start.is_game_over(), "Start board is already finished\n{}", start);

    loop {
        let mut board = start.clone();
        let mut player = first;
        let mut last_move = None;

        loop {
            if minimax(&mut board, depth, player, player) == Proof::Win {
                return RandomBoard {
                    board,
                    next_player: player,
                    last_move,
                };
            }

            let mv = match board.legal_moves().choose(rng) {
                Some(&mv) => mv,
                None => break,
            };
            let y = board.put(player, mv).expect("legal moves are never full");
            if board.caused_win(mv, y) {
                break;
            }

            last_move = Some((mv, y));
            player = player.other();
        }
    }
}
