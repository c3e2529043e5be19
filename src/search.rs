use std::{cmp::Reverse, collections::BinaryHeap};

use log::{debug, trace};

use crate::{
    maze::{Direction, Maze},
    score::{step_score, Score},
    Error,
};

/// Lowest known score of every (tile, arrival direction) state of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    scores: Vec<Option<Score>>,
    visited_state_n: usize,
}

impl ScoreTable {
    fn new(tile_n: usize) -> Self {
        Self {
            scores: vec![None; tile_n * Direction::all_dirs().len()],
            visited_state_n: 0,
        }
    }

    fn key(ind: usize, dir: Direction) -> usize {
        ind * Direction::all_dirs().len() + dir.ordinal()
    }

    fn set(&mut self, ind: usize, dir: Direction, score: Score) {
        self.scores[Self::key(ind, dir)] = Some(score);
    }

    /// `None` means the state can't be reached from the start.
    pub fn score(&self, ind: usize, dir: Direction) -> Option<Score> {
        self.scores.get(Self::key(ind, dir)).copied().flatten()
    }

    pub fn min_score_at(&self, ind: usize) -> Option<Score> {
        Direction::all_dirs()
            .iter()
            .filter_map(|dir| self.score(ind, *dir))
            .min()
    }

    pub fn reached_state_n(&self) -> usize {
        self.scores.iter().filter(|score| score.is_some()).count()
    }

    pub fn visited_state_n(&self) -> usize {
        self.visited_state_n
    }
}

#[derive(Debug, Clone)]
struct State {
    ind: usize,
    dir: Direction,
    score: Score,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for State {}

impl State {
    pub fn new(ind: usize, dir: Direction, score: Score) -> Self {
        Self { ind, dir, score }
    }
}

impl Maze {
    /// Facing the start direction on the start tile is free.
    pub const START_DIRECTION: Direction = Direction::East;

    /// Dijkstra's search over (tile, facing) states, starting on the start tile facing east.
    pub fn score_table(&self) -> ScoreTable {
        let mut table = ScoreTable::new(self.tile_n());
        let mut visited = vec![false; table.scores.len()];
        let mut possible_states = BinaryHeap::new();
        table.set(self.start_ind(), Self::START_DIRECTION, 0);
        possible_states.push(Reverse(State::new(
            self.start_ind(),
            Self::START_DIRECTION,
            0,
        )));

        while let Some(Reverse(cur_state)) = possible_states.pop() {
            let key = ScoreTable::key(cur_state.ind, cur_state.dir);
            if visited[key]
                || table
                    .score(cur_state.ind, cur_state.dir)
                    .is_some_and(|score| cur_state.score > score)
            {
                // Stale entry, a cheaper one has been handled already.
                continue;
            }
            visited[key] = true;
            table.visited_state_n += 1;
            trace!(
                "Visit {} facing {:?} with score {}.",
                self.ind_to_pos(cur_state.ind),
                cur_state.dir,
                cur_state.score
            );

            for edge in self.edges_from(cur_state.ind) {
                let Some(step) = step_score(cur_state.dir, edge.dir()) else {
                    continue;
                };

                let next_score = cur_state.score + step;
                if table
                    .score(edge.to_ind(), edge.dir())
                    .map_or(true, |score| next_score < score)
                {
                    table.set(edge.to_ind(), edge.dir(), next_score);
                    possible_states.push(Reverse(State::new(
                        edge.to_ind(),
                        edge.dir(),
                        next_score,
                    )));
                }
            }
        }

        debug!(
            "Search visited {} state(s), reached {} state(s).",
            table.visited_state_n,
            table.reached_state_n()
        );
        table
    }

    pub fn min_score(&self) -> Result<Score, Error> {
        self.min_score_in(&self.score_table())
    }

    pub fn min_score_in(&self, table: &ScoreTable) -> Result<Score, Error> {
        let min_score = table
            .min_score_at(self.end_ind())
            .ok_or_else(|| Error::NoPathToEnd(self.start_pos(), self.end_pos()))?;
        debug!("Minimum score from start to end is {}.", min_score);

        Ok(min_score)
    }
}
