use std::process::Command;

#[test]
fn prints_results_back_to_back() {
    let output = Command::new(env!("CARGO_BIN_EXE_sumame-example"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sumame-example");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "202020");
    assert!(output.stderr.is_empty());
}
