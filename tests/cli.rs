use std::process::Command;

fn run_with_zero_delay(exe: &str) -> std::process::Output {
    Command::new(exe)
        .args(["--delay-secs", "0"])
        .output()
        .expect("failed to spawn runner binary")
}

#[test]
fn foo_prints_foo_and_exits_zero() {
    let output = run_with_zero_delay(env!("CARGO_BIN_EXE_foo"));
    assert!(output.status.success());
    assert_eq!(output.stdout, b"foo\n");
}

#[test]
fn bar_prints_bar_and_exits_zero() {
    let output = run_with_zero_delay(env!("CARGO_BIN_EXE_bar"));
    assert!(output.status.success());
    assert_eq!(output.stdout, b"bar\n");
}
