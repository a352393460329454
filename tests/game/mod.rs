use std::collections::VecDeque;

use connect_four::ai::simple::RandomBot;
use connect_four::ai::{Bot, BotError};
use connect_four::board::{Board, Outcome, Player};
use connect_four::game::{Game, GameError};
use connect_four::pov::NonPov;
use connect_four::util::bot_game;
use connect_four::util::tiny::{consistent_rng, seeded_rng};
use connect_four::wdl::WDL;

/// Bot that plays a fixed list of columns, legal or not.
#[derive(Debug)]
struct ScriptedBot {
    moves: VecDeque<usize>,
}

impl ScriptedBot {
    fn new(moves: &[usize]) -> Self {
        ScriptedBot {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Bot for ScriptedBot {
    fn select_move(&mut self, _: &Board, _: Player) -> Result<usize, BotError> {
        self.moves.pop_front().ok_or(BotError::NoLegalMoves)
    }
}

#[test]
fn alternates_players() {
    let mut game = Game::new(Board::new(7, 6), ScriptedBot::new(&[3, 3]), ScriptedBot::new(&[3]));
    assert_eq!(game.next_player(), Player::A);
    assert_eq!(game.last_move(), None);

    assert_eq!(game.advance(), Ok(None));
    assert_eq!(game.next_player(), Player::B);
    assert_eq!(game.last_move(), Some((3, 0)));

    assert_eq!(game.advance(), Ok(None));
    assert_eq!(game.next_player(), Player::A);
    assert_eq!(game.last_move(), Some((3, 1)));

    assert_eq!(game.advance(), Ok(None));
    assert_eq!(game.board().tile(3, 0), Some(Player::A));
    assert_eq!(game.board().tile(3, 1), Some(Player::B));
    assert_eq!(game.board().tile(3, 2), Some(Player::A));
    assert!(!game.is_done());
}

#[test]
fn win_ends_game() {
    let mut game = Game::new(
        Board::new(7, 6),
        ScriptedBot::new(&[0, 1, 2, 3]),
        ScriptedBot::new(&[0, 1, 2]),
    );

    assert_eq!(game.play_out(), Ok(Outcome::WonBy(Player::A)));
    assert_eq!(game.outcome(), Some(Outcome::WonBy(Player::A)));
    assert!(game.is_done());
    assert_eq!(game.last_move(), Some((3, 0)));
    assert_eq!(game.board().winner(), Some(Player::A));
}

#[test]
fn second_player_wins() {
    let mut game = Game::new(
        Board::new(7, 6),
        ScriptedBot::new(&[6, 6, 5, 0]),
        ScriptedBot::new(&[0, 1, 2, 3]),
    );

    assert_eq!(game.play_out(), Ok(Outcome::WonBy(Player::B)));
    assert_eq!(game.board().winner(), Some(Player::B));
}

#[test]
fn full_board_is_draw() {
    let mut game = Game::new(Board::new(3, 1), ScriptedBot::new(&[0, 2]), ScriptedBot::new(&[1]));

    assert_eq!(game.advance(), Ok(None));
    assert_eq!(game.advance(), Ok(None));
    assert_eq!(game.advance(), Ok(Some(Outcome::Draw)));
    assert!(game.board().is_full());
}

#[test]
fn invalid_moves() {
    let mut game = Game::new(Board::new(4, 4), ScriptedBot::new(&[4]), ScriptedBot::new(&[]));
    match game.advance() {
        Err(GameError::InvalidMove { player, column, width, .. }) => {
            assert_eq!(player, Player::A);
            assert_eq!(column, 4);
            assert_eq!(width, 4);
        }
        other => panic!("Expected invalid move, got {:?}", other),
    }
    assert!(!game.is_done());

    let mut full_column = Board::new(4, 1);
    full_column.put(Player::A, 2);
    let mut game = Game::new(full_column, ScriptedBot::new(&[2]), ScriptedBot::new(&[]));
    match game.advance() {
        Err(GameError::InvalidMove { column, legal, .. }) => {
            assert_eq!(column, 2);
            assert_eq!(legal, vec![0, 1, 3]);
        }
        other => panic!("Expected invalid move, got {:?}", other),
    }
}

#[test]
fn bot_error_is_propagated() {
    let mut game = Game::new(Board::new(7, 6), ScriptedBot::new(&[0]), ScriptedBot::new(&[]));
    assert_eq!(game.advance(), Ok(None));
    assert_eq!(game.advance(), Err(GameError::Bot(BotError::NoLegalMoves)));
}

#[test]
fn restart_keeps_bots() {
    let mut game = Game::new(Board::new(7, 6), ScriptedBot::new(&[0, 3]), ScriptedBot::new(&[6]));
    game.advance().unwrap();
    game.advance().unwrap();

    let mut board = Board::new(7, 6);
    board.put(Player::A, 0);
    board.put(Player::A, 1);
    board.put(Player::A, 2);
    game.restart(board, Player::A);

    assert_eq!(game.last_move(), None);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.play_out(), Ok(Outcome::WonBy(Player::A)));
    assert_eq!(game.last_move(), Some((3, 0)));
}

#[test]
fn set_next_player() {
    let mut game = Game::new(Board::new(7, 6), ScriptedBot::new(&[]), ScriptedBot::new(&[5]));
    game.set_next_player(Player::B);

    game.board_mut().put(Player::A, 5);

    assert_eq!(game.advance(), Ok(None));
    assert_eq!(game.board().tile(5, 0), Some(Player::A));
    assert_eq!(game.board().tile(5, 1), Some(Player::B));
    assert_eq!(game.next_player(), Player::A);
}

#[test]
fn random_games() {
    for &(w, h) in &[(7, 6), (4, 4), (1, 1), (9, 3)] {
        for seed in 0..20 {
            let mut game = Game::new(
                Board::new(w, h),
                RandomBot::new(seeded_rng(seed)),
                RandomBot::new(seeded_rng(seed + 1000)),
            );
            let outcome = game.play_out().unwrap();

            match outcome {
                Outcome::WonBy(player) => assert_eq!(game.board().winner(), Some(player)),
                Outcome::Draw => {
                    assert!(game.board().is_full());
                    assert_eq!(game.board().winner(), None);
                }
            }
        }
    }
}

#[test]
fn random_match() {
    let result = bot_game::run(
        || Board::new(5, 4),
        || RandomBot::new(consistent_rng()),
        || RandomBot::new(rand::thread_rng()),
        4,
        true,
        |wdl, replay| assert!(wdl.sum() >= 1 && !replay.moves.is_empty()),
    )
    .unwrap();

    assert_eq!(result.game_count, 8);
    assert_eq!(result.replays.len(), 8);
    assert_eq!(result.wdl_l.sum(), 8);

    let wdl: WDL<u32> = result
        .replays
        .iter()
        .map(|r| r.outcome.pov(r.player_l).to_wdl())
        .sum();
    assert_eq!(wdl, result.wdl_l);

    for replay in &result.replays {
        let mut board = replay.start.clone();
        let mut player = Player::A;
        for &mv in &replay.moves {
            board.put(player, mv).unwrap();
            player = player.other();
        }

        match replay.outcome {
            Outcome::WonBy(winner) => assert_eq!(board.winner(), Some(winner)),
            Outcome::Draw => assert!(board.is_full()),
        }
    }
}
