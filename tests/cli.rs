use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_book() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "Je vois.\n\nIl part, elle reste.\n\nLongtemps, je me suis couché de bonne heure.\n"
    )
    .unwrap();
    file
}

#[test]
fn list_formats_via_cli() {
    let mut cmd = cargo_bin_cmd!("proust");
    cmd.arg("list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("sexpr")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("treeviz")),
    );
}

#[test]
fn export_sexpr_to_stdout() {
    let book = sample_book();
    let mut cmd = cargo_bin_cmd!("proust");
    cmd.arg("export")
        .arg(book.path())
        .arg("--header-lines")
        .arg("0")
        .arg("--to")
        .arg("2");

    cmd.assert().success().stdout(
        predicate::str::contains("(PARAGRAPH :id \"book-p0\"")
            .and(predicate::str::contains("(PARAGRAPH :id \"book-p1\""))
            .and(predicate::str::contains("book-p2").not()),
    );
}

#[test]
fn export_whole_book_as_json_to_file() {
    let book = sample_book();
    let output = NamedTempFile::new().unwrap();
    let mut cmd = cargo_bin_cmd!("proust");
    cmd.arg("export")
        .arg(book.path())
        .arg("--header-lines")
        .arg("0")
        .arg("--all")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(output.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Exported 1 unit(s)"));

    let written = fs::read_to_string(output.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value[0]["kind"], "BOOK");
    assert_eq!(value[0]["children"].as_array().unwrap().len(), 3);
}

#[test]
fn export_with_paragraph_limit() {
    let book = sample_book();
    let mut cmd = cargo_bin_cmd!("proust");
    cmd.arg("export")
        .arg(book.path())
        .arg("--header-lines")
        .arg("0")
        .arg("-n")
        .arg("1")
        .arg("-f")
        .arg("treeviz");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Je vois").and(predicate::str::contains("Il part").not()));
}

#[test]
fn unknown_format_is_reported() {
    let book = sample_book();
    let mut cmd = cargo_bin_cmd!("proust");
    cmd.arg("export")
        .arg(book.path())
        .arg("--header-lines")
        .arg("0")
        .arg("--format")
        .arg("yaml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("format 'yaml' not found"));
}

#[test]
fn missing_file_is_reported() {
    let mut cmd = cargo_bin_cmd!("proust");
    cmd.arg("export").arg("/no/such/swann.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("cannot read")));
}

#[test]
fn config_file_sets_the_default_format() {
    let book = sample_book();
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[loader]\nheader_lines = 0\n\n[export]\nformat = \"json\"").unwrap();

    let mut cmd = cargo_bin_cmd!("proust");
    cmd.arg("--config")
        .arg(config.path())
        .arg("export")
        .arg(book.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[").and(predicate::str::contains("\"kind\": \"PARAGRAPH\"")));
}
