use std::io::Write;
use std::process::Command;

fn lesson_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_array-intro"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn default_run_succeeds() {
    let output = lesson_command()
        .env_remove("ARRAY_INTRO_CONFIG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Some quick comments:\n"));
    assert!(stdout.ends_with("C[3,5]=-3.14159\n"));
}

#[test]
fn config_file_is_applied() {
    let file = config_file("rows = 8\ncols = 3\nprobe_row = 7\ncell_col = 1\nshow_addresses = false\n");
    let output = lesson_command()
        .env("ARRAY_INTRO_CONFIG", file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("A[7,2]=-1.23e+09\n"));
    assert!(!stdout.contains(" b=0x"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Loaded lesson configuration from"));
}

#[test]
fn invalid_config_exits_with_failure() {
    let file = config_file("rows = 3\n");
    let output = lesson_command()
        .env("ARRAY_INTRO_CONFIG", file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let error_line = stderr
        .lines()
        .find(|line| line.contains("error:"))
        .expect("error line on stderr");
    assert!(error_line.contains("Invalid value for field 'rows': must be greater than 5, got 3"));
}

#[test]
fn missing_config_file_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = lesson_command()
        .env("ARRAY_INTRO_CONFIG", dir.path().join("absent.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("absent.toml"));
}
