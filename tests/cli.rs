use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mapscript")).args(args)
                                                 .env_remove("RUST_LOG")
                                                 .output()
                                                 .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn evaluates_with_bindings() {
    let output = run(&["--set", "width=64", "--set", "half = width / 2", "half + 1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "33");
}

#[test]
fn set_rejects_invalid_names() {
    for binding in ["1bad=2", "a b=2", "none=1", "=1", "x.y=1"] {
        let output = run(&["--set", binding, "1"]);
        assert!(!output.status.success(), "`--set {binding}` should be rejected");
        assert!(String::from_utf8_lossy(&output.stderr).contains("is not a valid name"),
                "`--set {binding}` failed for another reason");
    }

    assert!(!run(&["--set", "missing_equals", "1"]).status.success());
}

#[test]
fn failures_are_reported_once() {
    let output = run(&["1 & 2"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Incomplete operator").count(), 1, "stderr: {stderr}");
    assert!(!stderr.contains("ERROR"), "stderr: {stderr}");
}

#[test]
fn assignment_batches_print_each_name() {
    let output = run(&["--assignments", "a = 2; b = a * 3;"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a = 2\nb = 6");
}
