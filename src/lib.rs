#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! Connect four on a board of any size, with a couple of bots to play it.
//!
//! The [Board](crate::board::Board) supports cheap in-place move application and undo
//! ([put](crate::board::Board::put) and [unput](crate::board::Board::unput)),
//! a full-board win scan and an O(1) check for whether the last move won.
//!
//! The implemented bots, all behind the [Bot](crate::ai::Bot) trait, are:
//! * [RandomBot](crate::ai::simple::RandomBot),
//!     which simply picks a random move.
//! * [MonteCarloBot](crate::ai::simple::MonteCarloBot),
//!     which simulates a fixed number of random games for each possible move and picks the one with the best score.
//! * [HybridBot](crate::ai::hybrid::HybridBot),
//!     which first tries to prove each move won or lost with a shallow alpha-beta search
//!     and only falls back to random games when that doesn't settle it.
//!
//! The search bots evaluate candidate moves in parallel on the rayon thread pool, each on its own copy of the board.
//!
//! Other utilities:
//! * A [Game](crate::game::Game) driver that alternates between two bots.
//! * A bot vs bot match runner to compare playing strength, see [bot_game](crate::util::bot_game).
//! * Random board generation functions, see [board_gen](crate::util::board_gen).
//!
//! # Examples
//!
//! ## Let two bots play a game.
//!
//! ```
//! # use connect_four::ai::simple::{MonteCarloBot, RandomBot};
//! # use connect_four::board::Board;
//! # use connect_four::game::Game;
//! let mut game = Game::new(Board::new(7, 6), MonteCarloBot::new(200), RandomBot::new(rand::thread_rng()));
//! let outcome = game.play_out().unwrap();
//!
//! println!("{}", game.board());
//! println!("Outcome: {:?}", outcome);
//! ```
//!
//! ## Get the best move according to the hybrid bot
//!
//! ```
//! # use connect_four::ai::hybrid::HybridBot;
//! # use connect_four::ai::Bot;
//! # use connect_four::board::{Board, Player};
//! let mut board = Board::default();
//! board.put(Player::A, 3);
//!
//! let mut bot = HybridBot::new(1000, 3);
//! println!("{:?}", bot.select_move(&board, Player::B));
//! ```

pub mod board;

pub mod pov;
pub mod wdl;

pub mod ai;

pub mod game;

pub mod util;
