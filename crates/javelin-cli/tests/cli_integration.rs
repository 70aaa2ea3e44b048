//! End-to-end tests that invoke the compiled binary.

use std::process::Command;

fn javelin_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_javelin"))
}

const HELLO: &str = r#"
public class Hello {
    public static void main(String[] args) {
        System.out.println("hi");
    }
}
"#;

#[test]
fn cli_translate_prints_python() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let file = dir.path().join("Hello.java");
    std::fs::write(&file, HELLO).expect("write source");

    let output = javelin_bin()
        .args(["translate", file.to_str().unwrap()])
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "translate should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("class Hello:"), "stdout:\n{stdout}");
    assert!(stdout.contains("@staticmethod"), "stdout:\n{stdout}");
    assert!(stdout.contains("print(\"hi\")"), "stdout:\n{stdout}");
}

#[test]
fn cli_translate_writes_output_file() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let file = dir.path().join("Hello.java");
    let out = dir.path().join("hello.py");
    std::fs::write(&file, HELLO).expect("write source");

    let output = javelin_bin()
        .args([
            "translate",
            file.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "translate should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let python = std::fs::read_to_string(&out).expect("read generated file");
    assert!(python.contains("def main(args: list[str]) -> None:"), "file:\n{python}");
}

#[test]
fn cli_parse_dumps_json_ast() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let file = dir.path().join("Hello.java");
    std::fs::write(&file, HELLO).expect("write source");

    let output = javelin_bin()
        .args(["parse", file.to_str().unwrap(), "--format", "json"])
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let ast: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(ast["types"][0]["name"], "Hello");
}

#[test]
fn cli_lex_lists_tokens() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let file = dir.path().join("Hello.java");
    std::fs::write(&file, "class Hello { } // done\n").expect("write source");

    let output = javelin_bin()
        .args(["lex", file.to_str().unwrap()])
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("KwClass"), "stdout:\n{stdout}");
    assert!(stdout.contains("(hidden)"), "stdout:\n{stdout}");
    assert!(stdout.contains("Eof"), "stdout:\n{stdout}");
}

#[test]
fn cli_reports_syntax_errors_with_position() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let file = dir.path().join("Broken.java");
    std::fs::write(&file, "class Broken { int x;").expect("write source");

    let output = javelin_bin()
        .args(["translate", file.to_str().unwrap()])
        .output()
        .expect("run binary");

    assert!(!output.status.success(), "translate should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("syntax error"), "stderr:\n{stderr}");
    assert!(stderr.contains("Broken"), "stderr:\n{stderr}");
}
