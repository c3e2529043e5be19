use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_first_example() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/example1.txt");

    cmd.assert().success().stdout(str::contains("7036"));
}

#[test]
fn part1_output_right_answer_for_second_example() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/example2.txt");

    cmd.assert().success().stdout(str::contains("11048"));
}

#[test]
fn part1_draws_best_paths_when_asked() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("--draw").arg("inputs/corridor.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("1024"))
        .stdout(str::contains("#OOOOOOOOOOOOO#"));
}

#[test]
fn part1_fails_when_end_is_walled_off() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/walled.txt");

    cmd.assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("No path from start position"));
}

#[test]
fn part1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/no_such_maze.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}
