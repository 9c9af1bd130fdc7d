use crate::common::TempWorkspace;
use assert_cmd::Command;
use predicates::prelude::*;

fn gen_font_inc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gen_font_inc"))
}

#[test]
fn prints_usage_without_arguments() {
    gen_font_inc()
        .assert()
        .success()
        .stdout("usage: gen_font_inc <8x8 .fnt font file path>\n")
        .stderr("");
}

#[test]
fn prints_sixteen_bytes_per_row() {
    let ws = TempWorkspace::new();
    let bytes: Vec<u8> = (0..20).chain([0xFF]).collect();
    let font = ws.write_file("font.fnt", &bytes);

    gen_font_inc().arg(&font).assert().success().stdout(
        "0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, \
         0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, \n\
         0x10, 0x11, 0x12, 0x13, 0xFF, \n",
    );
}

#[test]
fn empty_font_prints_nothing() {
    let ws = TempWorkspace::new();
    let font = ws.write_file("empty.fnt", b"");

    gen_font_inc().arg(&font).assert().success().stdout("");
}

#[test]
fn custom_row_width() {
    let ws = TempWorkspace::new();
    let font = ws.write_file("glyph.fnt", [0x3Cu8; 12]);

    let output = gen_font_inc()
        .arg(&font)
        .args(["--per-row", "8"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<_> = text.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], "0x3C, 0x3C, 0x3C, 0x3C, ");
}

#[test]
fn missing_font_file_fails() {
    let ws = TempWorkspace::new();
    gen_font_inc()
        .arg(ws.path().join("nope.fnt"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to read font file"));
}

#[test]
fn ignores_arguments_after_font_path() {
    let ws = TempWorkspace::new();
    let font = ws.write_file("font.fnt", [0x7Eu8, 0x81]);

    gen_font_inc()
        .arg(&font)
        .args(["extra", "more"])
        .assert()
        .success()
        .stdout("0x7E, 0x81, \n");
}
