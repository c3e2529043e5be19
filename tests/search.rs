use reindeer_maze::{step_score, Direction, Error, Maze, STEP_SCORE, TURN_SCORE};

const FIRST_EXAMPLE: &str = include_str!("../inputs/example1.txt");
const SECOND_EXAMPLE: &str = include_str!("../inputs/example2.txt");
const CORRIDOR: &str = include_str!("../inputs/corridor.txt");

#[test]
fn step_score_prices_straight_turn_and_reverse() {
    for facing in Direction::all_dirs() {
        assert_eq!(step_score(*facing, *facing), Some(STEP_SCORE));
        assert_eq!(
            step_score(*facing, facing.turn_clockwise()),
            Some(TURN_SCORE + STEP_SCORE)
        );
        assert_eq!(step_score(*facing, facing.turn_counterclockwise()), Some(1001));
        assert_eq!(step_score(*facing, facing.reverse()), None);
    }
}

#[test]
fn min_score_of_examples() {
    assert_eq!(Maze::try_from(FIRST_EXAMPLE).unwrap().min_score().unwrap(), 7036);
    assert_eq!(Maze::try_from(SECOND_EXAMPLE).unwrap().min_score().unwrap(), 11048);
}

#[test]
fn min_score_of_bent_corridor_is_length_plus_one_turn() {
    let maze = Maze::try_from(CORRIDOR).unwrap();
    let corridor_len = maze.open_tile_count() - 1;

    assert_eq!(maze.min_score().unwrap(), corridor_len + TURN_SCORE);
}

#[test]
fn min_score_of_adjacent_end_is_one_step() {
    let maze = Maze::try_from("####\n#SE#\n####").unwrap();

    assert_eq!(maze.min_score().unwrap(), 1);
}

#[test]
fn min_score_never_turns_back_on_start() {
    // Facing east on the start with the only way out behind.
    let maze = Maze::try_from("#####\n#ES##\n#####").unwrap();

    assert!(matches!(maze.min_score(), Err(Error::NoPathToEnd(_, _))));
}

#[test]
fn min_score_fails_when_end_is_walled_off() {
    let maze = reindeer_maze::read_maze("inputs/walled.txt").unwrap();

    assert!(matches!(maze.min_score(), Err(Error::NoPathToEnd(_, _))));
    assert!(maze.score_table().min_score_at(maze.end_ind()).is_none());
}

#[test]
fn min_score_is_at_least_manhattan_distance() {
    for text in [FIRST_EXAMPLE, SECOND_EXAMPLE, CORRIDOR] {
        let maze = Maze::try_from(text).unwrap();
        let distance = maze.start_pos().manhattan_distance(&maze.end_pos());

        assert!(maze.min_score().unwrap() >= distance);
    }
}

#[test]
fn score_table_is_same_on_every_search() {
    let maze = Maze::try_from(FIRST_EXAMPLE).unwrap();
    let table = maze.score_table();

    assert_eq!(table, maze.score_table());
    assert_eq!(table.score(maze.start_ind(), Direction::East), Some(0));
    assert!(table.visited_state_n() <= table.reached_state_n());
}

#[test]
fn score_table_obeys_step_scores() {
    let maze = Maze::try_from(SECOND_EXAMPLE).unwrap();
    let table = maze.score_table();

    // No state can be improved by one more step.
    for ind in 0..maze.tile_n() {
        for facing in Direction::all_dirs() {
            let Some(score) = table.score(ind, *facing) else {
                continue;
            };

            for edge in maze.edges_from(ind) {
                if let Some(step) = step_score(*facing, edge.dir()) {
                    let next_score = table.score(edge.to_ind(), edge.dir()).unwrap();
                    assert!(next_score <= score + step);
                }
            }
        }
    }
}
