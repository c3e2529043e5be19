use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn solve_prints_both_answers() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("inputs/example1.txt");

    cmd.assert().success().stdout("7036\n45\n");
}

#[test]
fn solve_prints_one_for_adjacent_start_and_end() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("inputs/adjacent.txt");

    cmd.assert().success().stdout("1\n2\n");
}

#[test]
fn solve_keeps_logs_out_of_stdout() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("-vv").arg("--draw").arg("inputs/example2.txt");

    cmd.assert()
        .success()
        .stdout("11048\n64\n")
        .stderr(str::contains("[DEBUG]"))
        .stderr(str::contains("#O#OOO..........#"))
        .stderr(str::contains("#OOO#.#.#.....#O#"));
}
