use std::io::Write;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use difference::Changeset;

fn assert_same_output(expected: &str, actual: &str) {
    if expected != actual {
        panic!("Output differs:\n{}", Changeset::new(expected, actual, "\n"));
    }
}

const TWO_MOVES_SOLUTION: &str = r"Found solution:
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 | 8 |   |
+---+---+---+
PathCost = 2
Heuristic = 0

+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 |   | 8 |
+---+---+---+
PathCost = 1
Heuristic = 1

+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 |   | 6 |
+---+---+---+
| 7 | 5 | 8 |
+---+---+---+
PathCost = 0
Heuristic = 2

dr
Moves: 2
";

#[test]
fn run_two_moves() {
    Command::main_binary()
        .unwrap()
        .arg("boards/two-moves.txt")
        .assert()
        .success()
        .stdout(TWO_MOVES_SOLUTION)
        .stderr("");
}

#[test]
fn run_progress() {
    let progress = r"Visited new depth: 0
total created / visited / discarded duplicates:
1               1               0

Visited new depth: 1
total created / visited / discarded duplicates:
5               2               0

Visited new depth: 2
total created / visited / discarded duplicates:
8               3               1

";

    let output = Command::main_binary()
        .unwrap()
        .arg("--progress")
        .arg("boards/two-moves.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_same_output(&format!("{}{}", progress, TWO_MOVES_SOLUTION), &stdout);
}

#[test]
fn run_five_moves() {
    let output = r"Found solution:
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 | 8 |   |
+---+---+---+
PathCost = 5
Heuristic = 0

+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 |   |
+---+---+---+
| 7 | 8 | 6 |
+---+---+---+
PathCost = 4
Heuristic = 1

+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 |   | 5 |
+---+---+---+
| 7 | 8 | 6 |
+---+---+---+
PathCost = 3
Heuristic = 2

+---+---+---+
| 1 |   | 3 |
+---+---+---+
| 4 | 2 | 5 |
+---+---+---+
| 7 | 8 | 6 |
+---+---+---+
PathCost = 2
Heuristic = 3

+---+---+---+
|   | 1 | 3 |
+---+---+---+
| 4 | 2 | 5 |
+---+---+---+
| 7 | 8 | 6 |
+---+---+---+
PathCost = 1
Heuristic = 4

+---+---+---+
| 4 | 1 | 3 |
+---+---+---+
|   | 2 | 5 |
+---+---+---+
| 7 | 8 | 6 |
+---+---+---+
PathCost = 0
Heuristic = 5

urdrd
Moves: 5
";

    Command::main_binary()
        .unwrap()
        .arg("boards/five-moves.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_solved() {
    let output = r"Found solution:
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 | 8 |   |
+---+---+---+
PathCost = 0
Heuristic = 0


Moves: 0
";

    Command::main_binary()
        .unwrap()
        .arg("boards/solved.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_unsolvable() {
    // no search at all, just the notice
    let output = r"+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 8 | 7 |   |
+---+---+---+
PathCost = 0
Heuristic = 2
Unsolvable
";

    Command::main_binary()
        .unwrap()
        .arg("boards/unsolvable.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_with_stats() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--stats")
        .arg("boards/two-moves.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (solution, stats) = stdout.split_at(stdout.find("\nStates created total").unwrap() + 1);
    assert_same_output(TWO_MOVES_SOLUTION, &solution[..solution.len() - 1]);
    assert!(stats.starts_with("States created total: 8\nStates visited total: 3\n"));
}

#[test]
fn run_prompt() {
    let mut child = Command::main_binary()
        .unwrap()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"boards/two-moves.txt\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let expected = format!(
        "Name of your input file (255 characters max): {}",
        r"Found solution:
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 | 8 |   |
+---+---+---+
PathCost = 2
Heuristic = 0

+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 |   | 8 |
+---+---+---+
PathCost = 1
Heuristic = 1

+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 |   | 6 |
+---+---+---+
| 7 | 5 | 8 |
+---+---+---+
PathCost = 0
Heuristic = 2

dr
Moves: 2
"
    );
    assert_same_output(&expected, &String::from_utf8(output.stdout).unwrap());
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("boards/does-not-exist.txt")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn run_invalid_board() {
    Command::main_binary()
        .unwrap()
        .arg("boards/invalid.txt")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn run_bad_args() {
    // clap complains on stderr, nothing should get to stdout
    Command::main_binary()
        .unwrap()
        .arg("--no-such-flag")
        .arg("boards/two-moves.txt")
        .assert()
        .failure()
        .stdout("");
}
