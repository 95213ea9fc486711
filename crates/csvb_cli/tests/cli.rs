// Drive the built binary end to end: file in, VB (or JSON) out.
use std::fs;
use std::process::Command;

fn csvb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_csvb"))
}

#[test]
fn converts_a_file_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("loop.cs");
    fs::write(&input, "for (int i = 0; i < 10; i++) { sum += i; }").unwrap();

    let output = csvb().arg(&input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("For i As Integer = 0 To 9"), "{stdout}");
    assert!(stdout.contains("sum += i"), "{stdout}");
}

#[test]
fn writes_output_file_with_rename() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.cs");
    let out = dir.path().join("out.vb");
    fs::write(&input, "total += 1;").unwrap();

    let status = csvb()
        .arg(&input)
        .args(["--rename", "total=grandTotal"])
        .arg("-o")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("grandTotal += 1"), "{written}");
}

#[test]
fn emit_ast_dumps_the_parsed_tree_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("c.cs");
    fs::write(&input, "class C { }").unwrap();

    let output = csvb().arg(&input).arg("--emit-ast").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"members\""), "{stdout}");
    assert!(stdout.contains("\"C\""), "{stdout}");
}

#[test]
fn malformed_rename_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("x.cs");
    fs::write(&input, "x + 1").unwrap();

    let output = csvb()
        .arg(&input)
        .args(["--rename", "oldName"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
