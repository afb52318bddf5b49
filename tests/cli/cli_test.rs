//! CLI contract tests.

use assert_cmd::Command;

fn quickadd(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = match Command::cargo_bin("quickadd") {
        Ok(cmd) => cmd,
        Err(e) => panic!("binary should build: {e}"),
    };
    cmd.env("QUICKADD_CONFIG_PATH", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => panic!("binary should run: {e}"),
    };
    assert!(output.status.success(), "{output:?}");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn tempdir() -> tempfile::TempDir {
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("tempdir: {e}"),
    }
}

#[test]
fn parse_prints_json_result() {
    let dir = tempdir();
    let stdout = stdout_of(quickadd(&dir).args([
        "parse",
        "chem lab every tuesday and thursday 2pm to 3:30pm",
        "--json",
    ]));
    let value: serde_json::Value = match serde_json::from_str(stdout.trim()) {
        Ok(value) => value,
        Err(e) => panic!("stdout should be JSON: {e}: {stdout}"),
    };
    assert_eq!(value["kind"], "schedule_item");
    assert_eq!(value["title"], "Chem lab");
}

#[test]
fn parse_reads_courses_from_config() {
    let dir = tempdir();
    let written = std::fs::write(
        dir.path().join("config.toml"),
        "[[courses]]\nname = \"Calculus II\"\nid = \"course-calc\"\n",
    );
    assert!(written.is_ok());
    let stdout = stdout_of(quickadd(&dir).args([
        "parse",
        "I got a B+ on the calc final, worth 30%",
        "--json",
    ]));
    assert!(stdout.contains("\"course_name\":\"Calculus II\""), "{stdout}");
}

#[test]
fn chat_routes_answers_to_pending_question() {
    let dir = tempdir();
    let stdout = stdout_of(
        quickadd(&dir)
            .args(["chat", "--json"])
            .write_stdin("yoga every week\ntuesdays and thursdays\n6pm to 7pm\n"),
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert!(lines.iter().take(2).all(|l| l.contains("needs_more_info")));
    assert!(lines.get(2).is_some_and(|l| l.contains("schedule_item")));
}

#[test]
fn robustness_prints_stability_summary() {
    let dir = tempdir();
    let stdout = stdout_of(quickadd(&dir).args([
        "robustness",
        "chem lab every tuesday and thursday 2pm to 3:30pm",
    ]));
    assert!(stdout.contains("stable"), "{stdout}");
    assert!(stdout.lines().count() >= 6);
}
