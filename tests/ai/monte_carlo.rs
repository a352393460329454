use connect_four::ai::simple::MonteCarloBot;
use connect_four::ai::Bot;
use connect_four::board::{Board, Player};

use crate::ai::bot_test_legal_moves;
use crate::ai::minimax::a_three_in_a_row;

#[test]
fn legal_moves() {
    bot_test_legal_moves(&mut MonteCarloBot::new(70), 7, 6, 20);
    bot_test_legal_moves(&mut MonteCarloBot::new(10), 4, 4, 10);
    bot_test_legal_moves(&mut MonteCarloBot::new(0), 5, 3, 10);
}

#[test]
fn takes_immediate_win() {
    let board = a_three_in_a_row();
    let mut bot = MonteCarloBot::new(1400);

    assert_eq!(bot.select_move(&board, Player::A), Ok(3));
}

#[test]
fn small_budget_ties_with_immediate_win() {
    // fewer rollouts than legal moves, so every move scores zero and the last one is picked
    let board = a_three_in_a_row();
    let mut bot = MonteCarloBot::new(6);

    assert_eq!(bot.select_move(&board, Player::A), Ok(6));
}

#[test]
fn single_legal_move() {
    let mut board = Board::new(3, 1);
    board.put(Player::A, 0);
    board.put(Player::B, 2);

    let mut bot = MonteCarloBot::new(100);
    assert_eq!(bot.select_move(&board, Player::A), Ok(1));
    assert_eq!(bot.select_move(&board, Player::B), Ok(1));
}

#[test]
fn ties_go_to_last_legal_move() {
    // no line fits, so every rollout is a draw and all moves score the same
    let mut board = Board::new(3, 1);
    board.put(Player::A, 0);
    board.unput(0);
    assert_eq!(board.legal_moves(), &[1, 2, 0]);

    let mut bot = MonteCarloBot::new(30);
    assert_eq!(bot.select_move(&board, Player::B), Ok(0));
}

#[test]
fn full_board() {
    let mut board = Board::new(2, 1);
    board.put(Player::A, 0);
    board.put(Player::B, 1);

    let mut bot = MonteCarloBot::new(100);
    assert!(bot.select_move(&board, Player::A).is_err());
}
