use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::Workspace;

fn sift_lines() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sift_lines"))
}

#[test]
fn shows_help() {
    sift_lines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--shortStat"))
        .stdout(predicate::str::contains("--prefix"));
}

#[test]
fn malformed_arguments_fail_before_any_io() {
    let ws = Workspace::new();
    let input = ws.write_file("in.txt", "1\n");

    sift_lines()
        .current_dir(ws.path())
        .args(["--no-such-flag"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    assert!(!ws.path().join("integers.txt").exists());
}

#[test]
fn writes_prefixed_files_and_prints_short_stats() {
    let ws = Workspace::new();
    let input = ws.write_file("in.txt", "1\n2\n0.5\n");
    let out = ws.path().join("results");

    sift_lines()
        .arg("-o")
        .arg(&out)
        .args(["-p", "run_", "-s"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("integers: 2"))
        .stdout(predicate::str::contains("floats: 1"))
        .stdout(predicate::str::contains("strings: 0"))
        .stdout(predicate::str::contains("run_integers.txt"));

    assert_eq!(ws.read_lines("results/run_integers.txt"), ["1", "2"]);
    assert_eq!(ws.read_lines("results/run_floats.txt"), ["0.5"]);
    assert!(!out.join("run_strings.txt").exists());
}

#[test]
fn defaults_to_current_directory() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "word\n");

    sift_lines()
        .current_dir(ws.path())
        .arg("in.txt")
        .assert()
        .success();

    assert_eq!(ws.read_lines("strings.txt"), ["word"]);
}

#[test]
fn append_flag_accumulates_across_runs() {
    let ws = Workspace::new();
    ws.write_file("first.txt", "1\n");
    ws.write_file("second.txt", "2\n");

    for input in ["first.txt", "second.txt"] {
        sift_lines()
            .current_dir(ws.path())
            .args(["-a", input])
            .assert()
            .success();
    }

    assert_eq!(ws.read_lines("integers.txt"), ["1", "2"]);
}

#[test]
fn overwrite_is_the_default() {
    let ws = Workspace::new();
    ws.write_file("first.txt", "1\n");
    ws.write_file("second.txt", "2\n");

    for input in ["first.txt", "second.txt"] {
        sift_lines().current_dir(ws.path()).arg(input).assert().success();
    }

    assert_eq!(ws.read_lines("integers.txt"), ["2"]);
}

#[test]
fn missing_input_is_reported_but_run_succeeds() {
    let ws = Workspace::new();
    ws.write_file("present.txt", "7\n");

    sift_lines()
        .current_dir(ws.path())
        .args(["-s", "absent.txt", "present.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("integers: 1"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn full_stats_as_json() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "0.1\n0.2\n0.7\nabc\n");

    let output = sift_lines()
        .current_dir(ws.path())
        .args(["-f", "--stat-format", "json", "in.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('{').unwrap();
    let end = stdout.rfind('}').unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout[start..=end]).unwrap();

    assert_eq!(json["floats"]["count"], 3);
    assert_eq!(json["floats"]["average"], 1.0 / 3.0);
    assert_eq!(json["strings"]["max_length"], 3);
    assert_eq!(json["integers"]["min"], serde_json::Value::Null);
}

#[test]
fn full_text_stats_mark_empty_categories() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "5\n");

    sift_lines()
        .current_dir(ws.path())
        .args(["-f", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full statistics"))
        .stdout(predicate::str::contains("average: 5.0 (integer = 5)"))
        .stdout(predicate::str::contains("N/A"));
}
