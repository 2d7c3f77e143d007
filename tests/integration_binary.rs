mod common;

use std::process::{Command, Output};
use tokio::net::TcpListener;

use common::{fake_redis, master_replies};

const CHECK_REDIS: &str = env!("CARGO_BIN_EXE_check_redis");

fn check_redis_command(args: &[&str]) -> Command {
    let mut command = Command::new(CHECK_REDIS);
    command
        .args(args)
        .env_remove("CHECK_REDIS_HOST")
        .env_remove("CHECK_REDIS_PORT")
        .env_remove("CHECK_REDIS_TIMEOUT")
        .env_remove("CHECK_REDIS_PASSWORD")
        .env_remove("RUST_LOG");
    command
}

/// The single stdout line of a run; fails if stdout is not exactly one line.
fn result_line(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout should be exactly one line: {:?}", stdout);
    assert!(stdout.ends_with('\n'));
    lines[0].to_string()
}

async fn run(args: Vec<String>) -> Output {
    let mut command = tokio::process::Command::from(check_redis_command(&args.iter().map(String::as_str).collect::<Vec<_>>()));
    command.output().await.unwrap()
}

fn server_args(port: u16, extra: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = vec!["-H".to_string(), "127.0.0.1".to_string(), "-p".to_string(), port.to_string()];
    args.extend(extra.iter().map(|arg| arg.to_string()));
    args
}

#[tokio::test]
async fn integration_binary_ok_exits_0() {
    let (port, _server) = fake_redis(master_replies(524288, 1048576)).await;

    let output = run(server_args(port, &[])).await;
    assert_eq!(output.status.code(), Some(0));
    let line = result_line(&output);
    assert!(line.starts_with("REDIS OK - Memory used 0/1 MiB (50.00%) |time="), "{}", line);
}

#[tokio::test]
async fn integration_binary_warning_exits_1() {
    let (port, _server) = fake_redis(master_replies(900000, 1000000)).await;

    let output = run(server_args(port, &[])).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(result_line(&output).starts_with("REDIS WARNING - Memory used 0/0 MiB (90.00%) Warning threshold (90.00%) exceeded|time="));
}

#[tokio::test]
async fn integration_binary_connection_refused_exits_2() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let output = run(server_args(port, &[])).await;
    assert_eq!(output.status.code(), Some(2));
    assert!(result_line(&output).starts_with(&format!("REDIS CRITICAL - dial tcp 127.0.0.1:{}: ", port)));
}

#[test]
fn integration_binary_unknown_role_exits_3() {
    let output = check_redis_command(&["-H", "127.0.0.1", "-r", "replica"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(result_line(&output), "REDIS UNKNOWN - Unknown role: replica");
}

#[test]
fn integration_binary_unknown_argument_exits_3() {
    let output = check_redis_command(&["--bogus"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    let line = result_line(&output);
    assert!(line.starts_with("REDIS UNKNOWN - "), "{}", line);
    assert!(line.contains("--bogus"), "{}", line);
}

#[test]
fn integration_binary_invalid_threshold_exits_3() {
    let output = check_redis_command(&["-w", "abc"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(result_line(&output).starts_with("REDIS UNKNOWN - "));
}

#[test]
fn integration_binary_version_exits_0() {
    let output = check_redis_command(&["-V"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn integration_binary_rust_log_from_dotenv() {
    let directory = std::env::temp_dir().join(format!("check_redis_dotenv_{}", std::process::id()));
    std::fs::create_dir_all(&directory).unwrap();
    std::fs::write(directory.join(".env"), "RUST_LOG=check_redis=info\n").unwrap();

    let output = check_redis_command(&["-H", "127.0.0.1", "-r", "replica"])
        .current_dir(&directory)
        .output()
        .unwrap();
    std::fs::remove_dir_all(&directory).unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(result_line(&output), "REDIS UNKNOWN - Unknown role: replica");
    // the log goes to stderr, stdout keeps its single line.
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid options: Unknown role: replica"));
}
