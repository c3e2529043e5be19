use std::fmt::Display;

use log::debug;

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn ordinal(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Smallest number of quarter turns between two directions, in 0..=2.
    pub fn quarter_turns_to(&self, other: Direction) -> usize {
        let diff = (4 + other.ordinal() - self.ordinal()) % 4;
        diff.min(4 - diff)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Start,
    End,
}

impl Tile {
    pub fn can_pass(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    pub fn symbol(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Start => 'S',
            Tile::End => 'E',
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '#' => Ok(Tile::Wall),
            '.' => Ok(Tile::Floor),
            'S' => Ok(Tile::Start),
            'E' => Ok(Tile::End),
            other => Err(Error::InvalidCharForMap(other)),
        }
    }
}

/// A step from one open tile onto an adjacent open tile, travelling along `dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: usize,
    to: usize,
    dir: Direction,
}

impl Edge {
    pub fn from_ind(&self) -> usize {
        self.from
    }

    pub fn to_ind(&self) -> usize {
        self.to
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }
}

#[derive(Debug)]
pub struct Maze {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
    start_ind: usize,
    end_ind: usize,
    out_edges: Vec<Vec<Edge>>,
    in_edges: Vec<Vec<Edge>>,
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_with(|_| None))
    }
}

impl TryFrom<&str> for Maze {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut builder = MazeBuilder::new();
        for line in value.lines() {
            builder.add_line(line)?;
        }

        builder.build()
    }
}

impl Maze {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn tile_n(&self) -> usize {
        self.tiles.len()
    }

    pub fn start_pos(&self) -> Position {
        self.ind_to_pos(self.start_ind)
    }

    pub fn end_pos(&self) -> Position {
        self.ind_to_pos(self.end_ind)
    }

    pub fn start_ind(&self) -> usize {
        self.start_ind
    }

    pub fn end_ind(&self) -> usize {
        self.end_ind
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind))
    }

    pub fn open_tile_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.can_pass()).count()
    }

    pub fn edge_count(&self) -> usize {
        self.out_edges.iter().map(|edges| edges.len()).sum()
    }

    pub fn edges_from(&self, ind: usize) -> &[Edge] {
        self.out_edges
            .get(ind)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edges_into(&self, ind: usize) -> &[Edge] {
        self.in_edges
            .get(ind)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.row_n && pos.c < self.col_n {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    pub fn ind_to_pos(&self, ind: usize) -> Position {
        Position::new(ind / self.col_n, ind % self.col_n)
    }

    /// Draws the maze row by row, letting `overlay` replace the symbol of any tile.
    pub(crate) fn render_with<F>(&self, overlay: F) -> String
    where
        F: Fn(usize) -> Option<char>,
    {
        let mut text = String::with_capacity((self.col_n + 1) * self.row_n);
        for (ind, tile) in self.tiles.iter().enumerate() {
            text.push(overlay(ind).unwrap_or_else(|| tile.symbol()));
            if (ind + 1) % self.col_n == 0 {
                text.push('\n');
            }
        }

        text
    }
}

#[derive(Debug)]
pub struct MazeBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
    start_pos: Option<Position>,
    end_pos: Option<Position>,
    pending_blank_n: usize,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
            start_pos: None,
            end_pos: None,
            pending_blank_n: 0,
        }
    }

    /// Like `add_row`, but blank lines are held back and only allowed at the end of the map.
    pub fn add_line(&mut self, text: &str) -> Result<(), Error> {
        if text.is_empty() {
            self.pending_blank_n += 1;
            return Ok(());
        }

        if self.pending_blank_n > 0 {
            // A blank line inside the map is a row without columns.
            self.pending_blank_n = 0;
            self.add_row("")?;
        }

        self.add_row(text)
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for (ind, c) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, ind);
            let tile = Tile::try_from(c)?;
            match tile {
                Tile::Start => {
                    if let Some(last_pos) = self.start_pos.as_ref() {
                        return Err(Error::MultipleStartPosition(last_pos.clone(), pos));
                    }

                    self.start_pos = Some(pos);
                }
                Tile::End => {
                    if let Some(last_pos) = self.end_pos.as_ref() {
                        return Err(Error::MultipleEndPosition(last_pos.clone(), pos));
                    }

                    self.end_pos = Some(pos);
                }
                Tile::Wall | Tile::Floor => (),
            }
            self.tiles.push(tile);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Maze, Error> {
        let col_n = match self.col_n {
            Some(col_n) if col_n > 0 && self.row_n > 0 => col_n,
            _ => return Err(Error::EmptyMap),
        };
        let Some(start_pos) = self.start_pos else {
            return Err(Error::NoStartPosition);
        };
        let Some(end_pos) = self.end_pos else {
            return Err(Error::NoEndPosition);
        };

        let tile_n = self.tiles.len();
        let mut out_edges = vec![Vec::new(); tile_n];
        let mut in_edges = vec![Vec::new(); tile_n];
        for (from, tile) in self.tiles.iter().enumerate() {
            if !tile.can_pass() {
                continue;
            }

            let from_pos = Position::new(from / col_n, from % col_n);
            for dir in Direction::all_dirs() {
                let Some(to_pos) = from_pos.neighbor(*dir) else {
                    continue;
                };
                if to_pos.r >= self.row_n || to_pos.c >= col_n {
                    continue;
                }

                let to = to_pos.r * col_n + to_pos.c;
                if self.tiles[to].can_pass() {
                    let edge = Edge {
                        from,
                        to,
                        dir: *dir,
                    };
                    out_edges[from].push(edge);
                    in_edges[to].push(edge);
                }
            }
        }

        let maze = Maze {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n,
            start_ind: start_pos.r * col_n + start_pos.c,
            end_ind: end_pos.r * col_n + end_pos.c,
            out_edges,
            in_edges,
        };
        debug!(
            "Built {}x{} maze with {} open tile(s) and {} edge(s), start at {}, end at {}.",
            maze.row_n,
            maze.col_n,
            maze.open_tile_count(),
            maze.edge_count(),
            start_pos,
            end_pos
        );

        Ok(maze)
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
