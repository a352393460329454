use connect_four::ai::Bot;
use connect_four::board::{Board, Player};
use connect_four::util::board_gen::random_board_with_moves;
use connect_four::util::tiny::consistent_rng;

mod monte_carlo;

/// Check that `bot` only returns legal moves and leaves the board untouched, on random unfinished boards.
pub fn bot_test_legal_moves(bot: &mut impl Bot, width: usize, height: usize, boards: u32) {
    let mut rng = consistent_rng();
    let start = Board::new(width, height);

    for i in 0..boards {
        let n = i % (width * height).min(16) as u32;
        let random = random_board_with_moves(&start, Player::A, n, &mut rng);
        if random.board.is_game_over() {
            continue;
        }

        let before = random.board.clone();
        let mv = bot
            .select_move(&random.board, random.next_player)
            .unwrap_or_else(|e| panic!("{:?} failed on\n{}: {}", bot, random.board, e));

        assert!(
            random.board.legal_moves().contains(&mv),
            "{:?} picked illegal move {} on\n{}",
            bot,
            mv,
            random.board
        );
        assert_eq!(before, random.board);
    }
}
