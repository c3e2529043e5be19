use std::collections::{HashSet, LinkedList};

use log::debug;

use crate::{
    maze::{Direction, Maze, Position},
    score::{step_score, Score},
    search::ScoreTable,
    Error,
};

/// Every tile lying on at least one path from start to end with the minimum score.
#[derive(Debug, Clone)]
pub struct BestPaths {
    score: Score,
    tiles: HashSet<usize>,
    states: Vec<(Position, Direction)>,
    positions: Vec<Position>,
}

impl BestPaths {
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tile_n(&self) -> usize {
        self.tiles.len()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// (tile, arrival direction) states used by at least one best path, sorted.
    pub fn states(&self) -> &[(Position, Direction)] {
        &self.states
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.positions.binary_search(pos).is_ok()
    }

    /// The maze drawn with `O` over every tile on a best path.
    pub fn render(&self, maze: &Maze) -> String {
        maze.render_with(|ind| self.tiles.contains(&ind).then_some('O'))
    }
}

impl Maze {
    pub fn best_paths(&self) -> Result<BestPaths, Error> {
        self.best_paths_in(&self.score_table())
    }

    /// Walks back from the end along tight steps only, i.e. steps whose source score plus
    /// step score equals the score recorded for the destination state.
    pub fn best_paths_in(&self, table: &ScoreTable) -> Result<BestPaths, Error> {
        let min_score = self.min_score_in(table)?;
        let end_states = Direction::all_dirs()
            .iter()
            .filter(|dir| table.score(self.end_ind(), **dir) == Some(min_score))
            .map(|dir| (self.end_ind(), *dir));
        let mut search_states = end_states.clone().collect::<LinkedList<_>>();
        let mut searched_states = end_states.collect::<HashSet<_>>();
        let mut tiles = HashSet::new();
        while let Some((cur_ind, cur_dir)) = search_states.pop_front() {
            tiles.insert(cur_ind);
            let Some(cur_score) = table.score(cur_ind, cur_dir) else {
                continue;
            };

            for edge in self
                .edges_into(cur_ind)
                .iter()
                .filter(|edge| edge.dir() == cur_dir)
            {
                for src_dir in Direction::all_dirs() {
                    let is_tight = table
                        .score(edge.from_ind(), *src_dir)
                        .zip(step_score(*src_dir, cur_dir))
                        .is_some_and(|(src_score, step)| src_score + step == cur_score);
                    if is_tight && searched_states.insert((edge.from_ind(), *src_dir)) {
                        search_states.push_back((edge.from_ind(), *src_dir));
                    }
                }
            }
        }
        debug_assert!(tiles.contains(&self.start_ind()));

        let mut states = searched_states
            .into_iter()
            .map(|(ind, dir)| (self.ind_to_pos(ind), dir))
            .collect::<Vec<_>>();
        states.sort();
        let mut positions = tiles
            .iter()
            .map(|ind| self.ind_to_pos(*ind))
            .collect::<Vec<_>>();
        positions.sort();
        debug!(
            "Found {} tile(s) in {} state(s) on paths with score {}.",
            tiles.len(),
            states.len(),
            min_score
        );

        Ok(BestPaths {
            score: min_score,
            tiles,
            states,
            positions,
        })
    }
}
