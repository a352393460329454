use std::fmt::{Debug, Display, Formatter};

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// The contents of a single cell, `None` is empty.
pub type Tile = Option<Player>;

/// The number of stones in a row needed to win.
pub const LINE: usize = 4;

/// The four line directions as `(dx, dy)`: horizontal, vertical and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A connect four board of arbitrary size.
///
/// Stones are stored in one flat row-major buffer, row `0` is the bottom row.
/// Moves are applied with [Board::put] and can be undone with [Board::unput],
/// which makes it cheap to walk a game tree in place.
///
/// The board does not track whose turn it is, that is up to the caller (see [crate::game::Game]).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    heights: Vec<usize>,
    open: Vec<usize>,
}

impl Board {
    pub const DEFAULT_WIDTH: usize = 7;
    pub const DEFAULT_HEIGHT: usize = 6;

    /// Construct an empty board. Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board must be non-empty, got {}x{}", width, height);
        let area = width.checked_mul(height).expect("Board area overflows usize");

        Board {
            width,
            height,
            tiles: vec![None; area],
            heights: vec![0; width],
            open: (0..width).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The tile at column `x` and row `y`. Panics if out of range.
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.tiles[self.index(x, y)]
    }

    /// The number of stones in column `x`.
    pub fn column_height(&self, x: usize) -> usize {
        self.heights[x]
    }

    /// Drop `tile` into column `x` and return the row it landed on.
    ///
    /// Returns `None` without modifying the board if the column is already full
    /// or if the empty tile is passed. Panics if `x` is out of range.
    pub fn put(&mut self, tile: impl Into<Tile>, x: usize) -> Option<usize> {
        assert!(x < self.width, "Column {} out of range for width {}", x, self.width);
        let player = tile.into()?;

        let y = self.heights[x];
        if y >= self.height {
            return None;
        }

        let index = self.index(x, y);
        self.tiles[index] = Some(player);
        self.heights[x] += 1;

        if self.heights[x] == self.height {
            if let Some(pos) = self.open.iter().position(|&c| c == x) {
                self.open.remove(pos);
            }
        }

        Some(y)
    }

    /// Undo the last [Board::put] on column `x`.
    ///
    /// Callers must undo moves in the reverse order they were put. A column that was full
    /// is appended to the _end_ of [Board::legal_moves], so after an undo the legal moves
    /// are no longer guaranteed to be sorted.
    pub fn unput(&mut self, x: usize) {
        assert!(x < self.width, "Column {} out of range for width {}", x, self.width);
        assert!(self.heights[x] != 0, "Cannot unput empty column {}", x);

        if self.heights[x] == self.height {
            self.open.push(x);
        }
        self.heights[x] -= 1;

        let index = self.index(x, self.heights[x]);
        self.tiles[index] = None;
    }

    /// Clear all tiles.
    ///
    /// This only touches the tiles, column heights and legal moves are kept as they are.
    /// It is only meant for boards whose bookkeeping is already consistent with being empty,
    /// use [Board::new] to get a fresh board.
    pub fn reset(&mut self) {
        self.tiles.iter_mut().for_each(|t| *t = None);
    }

    pub fn is_column_full(&self, x: usize) -> bool {
        assert!(x < self.width, "Column {} out of range for width {}", x, self.width);
        self.heights[x] >= self.height
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h >= self.height)
    }

    /// Whether someone has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// The columns that are not full yet. See [Board::unput] for the ordering.
    pub fn legal_moves(&self) -> &[usize] {
        &self.open
    }

    /// Scan the entire board for four in a row.
    ///
    /// Prefer [Board::caused_win] when the last move is known.
    pub fn winner(&self) -> Option<Player> {
        for x in 0..self.width {
            for y in 0..self.heights[x] {
                let player = match self.tile(x, y) {
                    Some(player) => player,
                    None => continue,
                };

                let found = DIRECTIONS.iter().any(|&(dx, dy)| {
                    (1..LINE as isize).all(|i| self.offset_tile(x, y, dx * i, dy * i) == Some(Some(player)))
                });
                if found {
                    return Some(player);
                }
            }
        }
        None
    }

    /// Whether the stone at `(x, y)` is part of four in a row.
    ///
    /// Only the lines through `(x, y)` are checked, so this agrees with [Board::winner]
    /// as long as `(x, y)` is the last stone placed and the board had no winner before it.
    pub fn caused_win(&self, x: usize, y: usize) -> bool {
        let player = match self.tile(x, y) {
            Some(player) => player,
            None => return false,
        };

        DIRECTIONS.iter().any(|&(dx, dy)| {
            let forward = self.run_length(x, y, dx, dy, player);
            let backward = self.run_length(x, y, -dx, -dy, player);
            1 + forward + backward >= LINE
        })
    }

    /// Count the consecutive stones of `player` starting next to `(x, y)` in direction `(dx, dy)`.
    fn run_length(&self, x: usize, y: usize, dx: isize, dy: isize, player: Player) -> usize {
        (1..LINE as isize)
            .take_while(|&i| self.offset_tile(x, y, dx * i, dy * i) == Some(Some(player)))
            .count()
    }

    /// The tile at `(x + dx, y + dy)`, or `None` if that is off the board.
    fn offset_tile(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<Tile> {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx < 0 || ny < 0 || nx >= self.width as isize || ny >= self.height as isize {
            return None;
        }
        Some(self.tile(nx as usize, ny as usize))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) out of range for {}x{} board",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The glyph used for this player's stones when displaying a board.
    pub fn to_char(self) -> char {
        match self {
            Player::A => 'O',
            Player::B => 'X',
        }
    }
}

fn tile_char(tile: Tile) -> char {
    tile.map_or('.', Player::to_char)
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (sep, line) = if f.alternate() { ("\n    ", "\n") } else { (" ", "") };

        write!(
            f,
            "Board {{{}size: {}x{},{}heights: {:?},{}open: {:?}{}}}",
            sep, self.width, self.height, sep, self.heights, sep, self.open, line,
        )
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                if x != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile_char(self.tile(x, y)))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", "=".repeat(2 * self.width - 1))
    }
}
