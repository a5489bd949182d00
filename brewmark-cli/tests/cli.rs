use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn markup_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn list_formats_shows_builtins() {
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.arg("list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("json")
            .and(predicate::str::contains("markup"))
            .and(predicate::str::contains("treeviz"))
            .and(predicate::str::contains("yaml")),
    );
}

#[test]
fn convert_markup_file_to_json() {
    let file = markup_file("# Title\n\nSome **bold** text.");
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.arg("convert").arg(file.path()).arg("--to").arg("json");

    cmd.assert().success().stdout(
        predicate::str::contains(r#""type": "heading""#)
            .and(predicate::str::contains(r#""type": "bold""#)),
    );
}

#[test]
fn convert_stdin_markup_round_trip() {
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.args(["convert", "-", "--to", "markup"])
        .write_stdin("# Title\n\\pagebreak{art}\n");

    cmd.assert()
        .success()
        .stdout("# Title\n\n\\page{art}\n");
}

#[test]
fn convert_uses_config_file() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[serializer]\nheading_style = \"collapse\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.args(["convert", "-", "--to", "markup", "--config"])
        .arg(config.path())
        .write_stdin("### Deep");

    cmd.assert().success().stdout("## Deep\n");
}

#[test]
fn convert_with_normalize_promotes_footnotes() {
    let tree = r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"{{footnote Example Text }} "}]}]}"#;
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.args(["convert", "-", "--from", "json", "--to", "markup", "--normalize"])
        .write_stdin(tree);

    cmd.assert()
        .success()
        .stdout("{{footnote Example Text}}\n");
}

#[test]
fn normalize_command_writes_json() {
    let tree = r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"{{footnote x}}"}]}]}"#;
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.args(["normalize", "-"]).write_stdin(tree);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "footnoteBlock""#));
}

#[test]
fn check_lists_recoveries() {
    let file = markup_file("{{wide\nnever closed");
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.arg("check").arg(file.path());

    cmd.assert().success().stdout(
        predicate::str::contains("1 recoveries")
            .and(predicate::str::contains("unterminated-block")),
    );
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.args(["convert", "-", "--to", "nope"]).write_stdin("text");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("format 'nope' not found"));
}

#[test]
fn treeviz_is_write_only() {
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.args(["convert", "-", "--from", "treeviz"]).write_stdin("text");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not support parsing"));
}

#[test]
fn invalid_tree_fails_with_message() {
    let mut cmd = cargo_bin_cmd!("brewmark");
    cmd.args(["convert", "-", "--from", "json", "--to", "markup"])
        .write_stdin(r#"{"type":"paragraph"}"#);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected a `doc` root node"));
}
