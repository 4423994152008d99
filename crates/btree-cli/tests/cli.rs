use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("btreeidx").unwrap()
}

#[test]
fn create_then_insert_then_search() {
    let dir = tempdir().unwrap();
    let index = dir.path().join("idx.bin");

    cli()
        .args(["create", index.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created index file"));

    cli()
        .args(["insert", index.to_str().unwrap(), "42", "4200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted key 42 as root."));

    cli()
        .args(["search", index.to_str().unwrap(), "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key 42 found with value 4200."));

    cli()
        .args(["search", index.to_str().unwrap(), "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key 7 not found."));
}

#[test]
fn create_twice_fails() {
    let dir = tempdir().unwrap();
    let index = dir.path().join("idx.bin");
    cli().args(["create", index.to_str().unwrap()]).assert().success();
    cli()
        .args(["create", index.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn search_on_missing_file_reports_error() {
    let dir = tempdir().unwrap();
    let index = dir.path().join("missing.bin");
    cli()
        .args(["search", index.to_str().unwrap(), "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn duplicate_insert_is_rejected() {
    let dir = tempdir().unwrap();
    let index = dir.path().join("idx.bin");
    cli().args(["create", index.to_str().unwrap()]).assert().success();
    cli()
        .args(["insert", index.to_str().unwrap(), "1", "10"])
        .assert()
        .success();
    cli()
        .args(["insert", index.to_str().unwrap(), "1", "99"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("already exists. Insertion aborted."));
}

#[test]
fn load_then_extract_round_trips() {
    let dir = tempdir().unwrap();
    let index = dir.path().join("idx.bin");
    let csv_in = dir.path().join("in.csv");
    let csv_out = dir.path().join("out.csv");
    std::fs::write(&csv_in, "1,10\n2,20\n3,30\n").unwrap();

    cli().args(["create", index.to_str().unwrap()]).assert().success();
    cli()
        .args([
            "load",
            index.to_str().unwrap(),
            csv_in.to_str().unwrap(),
        ])
        .assert()
        .success();
    cli()
        .args([
            "extract",
            index.to_str().unwrap(),
            csv_out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&csv_out).unwrap();
    assert_eq!(contents, "1,10\n2,20\n3,30\n");
}

#[test]
fn search_on_empty_tree_reports_empty() {
    let dir = tempdir().unwrap();
    let index = dir.path().join("idx.bin");
    cli().args(["create", index.to_str().unwrap()]).assert().success();
    cli()
        .args(["search", index.to_str().unwrap(), "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR : Tree is empty."));
}

#[test]
fn print_on_empty_index_says_so() {
    let dir = tempdir().unwrap();
    let index = dir.path().join("idx.bin");
    cli().args(["create", index.to_str().unwrap()]).assert().success();
    cli()
        .args(["print", index.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Index is empty."));
}
