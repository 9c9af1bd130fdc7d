use crate::common::TempWorkspace;
use assert_cmd::Command;
use predicates::prelude::*;

fn count_lines() -> Command {
    Command::new(env!("CARGO_BIN_EXE_count_lines"))
}

fn sample_tree() -> TempWorkspace {
    let ws = TempWorkspace::new();
    ws.write_file("a.txt", "1\n2\n3\n");
    ws.write_file("sub/b.txt", "1\n2\n3\n4\n5\n");
    ws.write_file("sub/deeper/Makefile", "all:\n\ttrue");
    ws
}

#[test]
fn shows_help() {
    count_lines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_lines"))
        .stdout(predicate::str::contains("--keep-going"));
}

#[test]
fn prints_totals_per_extension() {
    let ws = sample_tree();
    count_lines()
        .arg(ws.path())
        .assert()
        .success()
        .stdout("{'': 2, '.txt': 8}\n");
}

#[test]
fn defaults_to_current_directory() {
    let ws = sample_tree();
    count_lines()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout("{'': 2, '.txt': 8}\n");
}

#[test]
fn sums_across_multiple_roots() {
    let one = sample_tree();
    let two = TempWorkspace::new();
    two.write_file("main.rs", "fn main() {}\n");
    two.write_file("c.txt", "x\n");

    count_lines()
        .arg(one.path())
        .arg(two.path())
        .assert()
        .success()
        .stdout("{'': 2, '.rs': 1, '.txt': 9}\n");
}

#[test]
fn empty_files_report_zero() {
    let ws = TempWorkspace::new();
    ws.write_file("a.rs", "");
    ws.write_file("b.toml", "");
    ws.create_dir("empty/nested");

    count_lines()
        .arg(ws.path())
        .assert()
        .success()
        .stdout("{'.rs': 0, '.toml': 0}\n");
}

#[test]
fn json_output() {
    let ws = sample_tree();
    let output = count_lines()
        .args(["--format", "json"])
        .arg(ws.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "": 2, ".txt": 8 }));
}

#[test]
fn table_output() {
    let ws = sample_tree();
    count_lines()
        .args(["--format", "table"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"))
        .stdout(predicate::str::contains("TOTAL (2 extensions, 3 files)"));
}

#[test]
fn writes_output_file() {
    let ws = sample_tree();
    let out_dir = TempWorkspace::new();
    let out_path = out_dir.path().join("totals.txt");

    count_lines()
        .arg(ws.path())
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, "{'': 2, '.txt': 8}\n");
}

#[test]
fn aborts_on_non_text_file() {
    let ws = sample_tree();
    ws.write_file("image.bin", [0x89u8, 0x50, 0x4E, 0x47, 0xFF, 0xFE]);

    count_lines()
        .arg(ws.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn keep_going_skips_non_text_file() {
    let ws = sample_tree();
    ws.write_file("image.bin", [0x89u8, 0x50, 0x4E, 0x47, 0xFF, 0xFE]);

    count_lines()
        .arg("--keep-going")
        .arg(ws.path())
        .assert()
        .success()
        .stdout("{'': 2, '.txt': 8}\n")
        .stderr(predicate::str::contains("Error processing"))
        .stderr(predicate::str::contains("image.bin"));
}

#[test]
fn rejects_file_as_root() {
    let ws = sample_tree();
    count_lines()
        .arg(ws.path().join("a.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn rejects_missing_root() {
    let ws = TempWorkspace::new();
    count_lines()
        .arg(ws.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot access"));
}

#[test]
fn parallel_jobs_give_same_totals() {
    let ws = TempWorkspace::new();
    for i in 0..30 {
        ws.write_file(&format!("d{}/f{i}.rs", i % 3), "x\n".repeat(i));
    }

    let sequential = count_lines().arg(ws.path()).output().unwrap();
    let parallel = count_lines().args(["-j", "4"]).arg(ws.path()).output().unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
    assert_eq!(String::from_utf8(parallel.stdout).unwrap(), "{'.rs': 435}\n");
}

#[cfg(unix)]
#[test]
fn survives_symlink_cycle() {
    let ws = sample_tree();
    std::os::unix::fs::symlink(ws.path(), ws.path().join("sub/loop")).unwrap();

    count_lines()
        .arg(ws.path())
        .assert()
        .success()
        .stdout("{'': 2, '.txt': 8}\n")
        .stderr(predicate::str::contains("symlink cycle"));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_aborts_unless_keep_going() {
    let ws = sample_tree();
    std::os::unix::fs::symlink(ws.path().join("gone.txt"), ws.path().join("dangling.txt"))
        .unwrap();

    count_lines()
        .arg(ws.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Application Error"));

    count_lines()
        .arg("--keep-going")
        .arg(ws.path())
        .assert()
        .success()
        .stdout("{'': 2, '.txt': 8}\n")
        .stderr(
            predicate::str::contains("Error processing")
                .and(predicate::str::contains("dangling.txt")),
        );
}
