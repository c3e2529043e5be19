use crate::maze::Direction;

pub type Score = usize;

/// Score of moving one tile forward.
pub const STEP_SCORE: Score = 1;
/// Extra score of rotating a quarter turn before the move.
pub const TURN_SCORE: Score = 1000;

/// Score of stepping along `dir` while facing `facing`.
///
/// Going straight costs a single step, a quarter turn in either sense costs the turn
/// plus the step. Reversing on the spot is never allowed, so it has no score.
pub fn step_score(facing: Direction, dir: Direction) -> Option<Score> {
    match facing.quarter_turns_to(dir) {
        0 => Some(STEP_SCORE),
        1 => Some(TURN_SCORE + STEP_SCORE),
        _ => None,
    }
}
