//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};
use std::sync::Mutex;
use std::time::Instant;

use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use tracing::info;

use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};
use crate::game::{Game, GameError};
use crate::pov::NonPov;
use crate::util::rating::elo_from_wdl;
use crate::wdl::WDL;

/// Run `bot_l` against `bot_r` on the board given by `start`.
///
/// `games_per_side` games are run, except if `both_sides` is true, in
/// which case a match consists of two games per start position where players switch sides.
/// The left bot plays as [Player::A] in the unswitched games.
///
/// `callback` is called after every finished game with the running WDL of the left bot.
pub fn run<L: Bot, R: Bot>(
    start: impl Fn() -> Board + Sync,
    bot_l: impl Fn() -> L + Sync,
    bot_r: impl Fn() -> R + Sync,
    games_per_side: u32,
    both_sides: bool,
    callback: impl Fn(WDL<u32>, &Replay) + Sync,
) -> Result<BotGameResult, GameError> {
    let callback = &callback;

    // this instantiates both at least once so we catch errors before starting a bunch of threads
    let debug_l = format!("{:?}", bot_l());
    let debug_r = format!("{:?}", bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let starts: Vec<Board> = (0..games_per_side).map(|_| start()).collect();

    let partial_wdl = Mutex::new(WDL::<u32>::default());

    let replays: Vec<Replay> = (0..game_count)
        .into_par_iter()
        .panic_fuse()
        .map(|game_i| -> Result<Replay, GameError> {
            let flip = both_sides && game_i % 2 == 1;
            let pair_i = if both_sides { game_i / 2 } else { game_i };
            let start = &starts[pair_i as usize];

            let replay = if flip {
                play_single_game(start, Player::B, bot_r(), bot_l())?
            } else {
                play_single_game(start, Player::A, bot_l(), bot_r())?
            };

            let mut partial_wdl = partial_wdl.lock().unwrap();
            *partial_wdl += replay.outcome.pov(replay.player_l).to_wdl();
            callback(*partial_wdl, &replay);

            Ok(replay)
        })
        .collect::<Result<_, GameError>>()?;

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    let result = BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count as f32,
        wdl_l: replays.iter().map(|r| r.outcome.pov(r.player_l).to_wdl()).sum(),
        time_l: total_time_l / move_count_l as f32,
        time_r: total_time_r / move_count_r as f32,
        debug_l,
        debug_r,
        replays,
    };

    info!(games = game_count, wdl_l = ?result.wdl_l, "match finished");
    Ok(result)
}

/// Play a single game where `bot_a` is the left bot iff `player_l == Player::A`.
fn play_single_game<A: Bot, B: Bot>(start: &Board, player_l: Player, bot_a: A, bot_b: B) -> Result<Replay, GameError> {
    let mut game = Game::new(start.clone(), bot_a, bot_b);

    let mut total_time = [0.0; 2];
    let mut move_count = [0; 2];
    let mut moves = vec![];

    let outcome = loop {
        let mover = game.next_player();
        let start_time = Instant::now();
        let outcome = game.advance()?;

        let side = if mover == player_l { 0 } else { 1 };
        total_time[side] += start_time.elapsed().as_secs_f32();
        move_count[side] += 1;
        if let Some((column, _)) = game.last_move() {
            moves.push(column);
        }

        if let Some(outcome) = outcome {
            break outcome;
        }
    };

    Ok(Replay {
        start: start.clone(),
        player_l,
        moves,
        outcome,
        total_time_l: total_time[0],
        total_time_r: total_time[1],
        move_count_l: move_count[0],
        move_count_r: move_count[1],
    })
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub start: Board,
    pub player_l: Player,

    /// The columns played, starting with [Player::A].
    pub moves: Vec<usize>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l,)?;
        writeln!(
            f,
            "  left      {:.3?}",
            self.wdl_l.to_f32() / self.game_count as f32
        )?;
        writeln!(f, "  left elo: {:.1}", elo_from_wdl(self.wdl_l.to_f32()))?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
