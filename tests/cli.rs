mod common;

use assert_cmd::Command;
use common::create_fixture;
use predicates::prelude::*;
use tempfile::TempDir;

fn srcviz() -> Command {
    Command::cargo_bin("srcviz").unwrap()
}

#[test]
fn test_help_flag() {
    srcviz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("nested hierarchy snapshot"))
        .stdout(predicate::str::contains("--exts"))
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--watch"))
        .stdout(predicate::str::contains("--debounce"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    srcviz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("srcviz"));
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    srcviz()
        .arg("/this/path/does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_nonexistent_path_reports_failed_crawl() {
    srcviz()
        .arg("/this/path/does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("❌ Failed Visualizing /this/path/does/not/exist"))
        .stderr(predicate::str::contains(
            "An error has occurred. Ensure you entered a valid directory path.",
        ));
}

#[test]
fn test_file_path_exits_with_error() {
    let tmp = create_fixture(&["afile.txt"]);
    srcviz()
        .arg(tmp.path().join("afile.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("attempting to scan single file"));
}

#[test]
fn test_blank_extension_list_is_rejected() {
    let tmp = TempDir::new().unwrap();
    srcviz()
        .arg(tmp.path())
        .args(["--exts", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no wanted extensions"));
}

#[test]
fn test_snapshot_printed_to_stdout() {
    let tmp = create_fixture(&["src/main.go", "src/notes.txt", "lib.go"]);
    let output = srcviz()
        .arg(tmp.path())
        .args(["-e", ".go"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let expected_root = tmp.path().canonicalize().unwrap();
    assert_eq!(
        value["name"],
        expected_root.file_name().unwrap().to_string_lossy().to_string()
    );
    let children = value["children"].as_array().unwrap();
    assert_eq!(children[0]["name"], "lib.go");
    assert_eq!(children[1]["name"], "src");
    assert_eq!(children[1]["children"].as_array().unwrap().len(), 1);
}

#[test]
fn test_empty_result_uses_placeholder() {
    let tmp = create_fixture(&["docs/", "readme.txt"]);
    srcviz()
        .arg(tmp.path())
        .args(["-e", ".rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""children":[{"name":"(No source code files found)","size":1}]"#,
        ));
}

#[test]
fn test_output_file_written() {
    let tmp = create_fixture(&["a.rs"]);
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("dirdata.json");
    srcviz()
        .arg(tmp.path())
        .arg("--pretty")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\n  \"children\": ["), "{text}");
    assert!(text.contains("\"a.rs\""));
}

#[test]
fn test_ignore_flag_prunes() {
    let tmp = create_fixture(&["vendor/x.go", "main.go"]);
    srcviz()
        .arg(tmp.path())
        .args(["-I", "vendor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.go"))
        .stdout(predicate::str::contains("vendor").not());
}

#[test]
fn test_default_debounce_is_200() {
    use clap::Parser;
    use srcviz::cli::Args;
    let args = Args::parse_from(["srcviz", "."]);
    assert_eq!(args.debounce_ms, 200);
}

#[test]
fn test_debounce_floor_enforced() {
    use clap::Parser;
    use srcviz::cli::Args;
    let args = Args::parse_from(["srcviz", "--debounce", "10", "."]).validated();
    assert_eq!(args.debounce_ms, 50, "Debounce floor should be 50ms");
}

#[test]
fn test_multiple_ignore_patterns() {
    use clap::Parser;
    use srcviz::cli::Args;
    let args = Args::parse_from(["srcviz", "-I", "*.log", "-I", "target", "."]);
    assert_eq!(args.ignore, vec!["*.log", "target"]);
}

#[test]
fn test_quiet_resets_verbose() {
    use clap::Parser;
    use srcviz::cli::Args;
    let args = Args::parse_from(["srcviz", "-vv", "--quiet", "."]).validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
}
