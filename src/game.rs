//! The turn loop: a board and one bot per player.
use crate::ai::{Bot, BotError};
use crate::board::{Board, Outcome, Player};

/// Errors that end a game early.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum GameError {
    /// The bot broke its contract by returning a column that can't be played.
    #[error("bot for player {player:?} returned invalid move {column} (width {width}, legal: {legal:?})")]
    InvalidMove {
        player: Player,
        column: usize,
        width: usize,
        legal: Vec<usize>,
    },

    #[error("bot failed to select a move: {0}")]
    Bot(#[from] BotError),
}

/// A game between two bots, `bot_a` plays as [Player::A] and `bot_b` as [Player::B].
#[derive(Debug)]
pub struct Game<A: Bot, B: Bot> {
    board: Board,
    bot_a: A,
    bot_b: B,
    next_player: Player,
    last_move: Option<(usize, usize)>,
    outcome: Option<Outcome>,
}

impl<A: Bot, B: Bot> Game<A, B> {
    /// Start a game on `board` with [Player::A] to move.
    pub fn new(board: Board, bot_a: A, bot_b: B) -> Self {
        Game {
            board,
            bot_a,
            bot_b,
            next_player: Player::A,
            last_move: None,
            outcome: None,
        }
    }

    /// Continue from `board` with `next_player` to move, keeping the bots.
    pub fn restart(&mut self, board: Board, next_player: Player) {
        self.board = board;
        self.next_player = next_player;
        self.last_move = None;
        self.outcome = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, used to set up positions before playing.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn set_next_player(&mut self, player: Player) {
        self.next_player = player;
    }

    /// The `(column, row)` of the last stone played in this game, if any.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// The outcome, `None` while the game is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    /// Ask the bot of the next player for a move and play it.
    ///
    /// Returns the outcome if this move ended the game, either by winning or by filling the board.
    /// Must not be called once the game is done.
    pub fn advance(&mut self) -> Result<Option<Outcome>, GameError> {
        debug_assert!(self.outcome.is_none(), "Game is already done: {:?}", self.outcome);

        let mover = self.next_player;
        let column = match mover {
            Player::A => self.bot_a.select_move(&self.board, mover)?,
            Player::B => self.bot_b.select_move(&self.board, mover)?,
        };

        let invalid = |board: &Board| GameError::InvalidMove {
            player: mover,
            column,
            width: board.width(),
            legal: board.legal_moves().to_vec(),
        };
        if column >= self.board.width() {
            return Err(invalid(&self.board));
        }
        let row = self.board.put(mover, column).ok_or_else(|| invalid(&self.board))?;

        self.next_player = mover.other();
        self.last_move = Some((column, row));

        self.outcome = if self.board.caused_win(column, row) {
            Some(Outcome::WonBy(mover))
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        };

        Ok(self.outcome)
    }

    /// Keep calling [Game::advance] until the game is done.
    pub fn play_out(&mut self) -> Result<Outcome, GameError> {
        loop {
            if let Some(outcome) = self.advance()? {
                return Ok(outcome);
            }
        }
    }
}
