use httpmock::Method::GET;
use httpmock::MockServer;
use std::path::Path;
use std::process::{Command, Output};

fn run_pushrelay(args: &[&str]) -> Result<String, String> {
    let output = Command::new(env!("CARGO_BIN_EXE_pushrelay"))
        .args(args)
        .output()
        .map_err(|e| format!("Failed to run pushrelay: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Command failed: {}", stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run `pushrelay push` keeping the full output; logging follows the config file only.
fn run_push(config: &str, user: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pushrelay"))
        .args([
            "push", "Hello", "--config", config, "--user", user, "--service", "svc",
            "--protocol", "p1", "--domain", "d.example",
        ])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pushrelay")
}

fn write_config(dir: &Path) -> String {
    write_config_with_push_base(dir, "http://sads.example/push")
}

fn write_config_with_push_base(dir: &Path, push_base_url: &str) -> String {
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        format!(
            concat!(
                "push_base_url = \"{}\"\n",
                "deploy_base_url = \"http://plugin.example/\"\n",
                "request_timeout_seconds = 5\n",
                "\n",
                "[[applications]]\n",
                "domain = \"d.example\"\n",
            ),
            push_base_url
        ),
    )
    .unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_help_lists_commands() {
    let help = run_pushrelay(&["--help"]).unwrap();
    assert!(help.contains("push"));
    assert!(help.contains("render"));
    assert!(help.contains("config"));
}

#[test]
fn test_render_prints_document_and_push_url() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let out = run_pushrelay(&[
        "render", "Hello", "--config", &config, "--user", "u1", "--service", "svc",
        "--protocol", "p1", "--domain", "d.example", "--back-url", "http://cb/",
    ])
    .unwrap();

    assert!(out.contains("<div class=\"message\">Hello</div>"));
    assert!(out.contains("http://plugin.example/input?domain=d.example"));
    let push_line = out.lines().last().unwrap();
    assert!(push_line.starts_with("http://sads.example/push?service=svc&user=u1&protocol=p1&doc="));
}

#[test]
fn test_render_unknown_domain_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let err = run_pushrelay(&[
        "render", "Hello", "--config", &config, "--user", "u1", "--service", "svc",
        "--protocol", "p1", "--domain", "other.example",
    ])
    .unwrap_err();
    assert!(err.contains("Unknown application domain"));
}

#[test]
fn test_config_init_writes_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("config.toml");
    let path_str = path.to_string_lossy().into_owned();

    run_pushrelay(&["config", "--init", "--config", &path_str]).unwrap();
    assert!(path.exists());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("push_base_url"));

    assert!(run_pushrelay(&["config", "--init", "--config", &path_str]).is_err());
}

#[test]
fn test_push_delivered_exits_zero() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/push")
            .query_param("service", "svc")
            .query_param("user", "u1")
            .query_param("protocol", "p1")
            .query_param_exists("doc");
        then.status(200);
    });
    let dir = tempfile::tempdir().unwrap();
    let config = write_config_with_push_base(dir.path(), &server.url("/push"));

    let output = run_push(&config, "u1");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Delivered to user u1 via svc"));
    mock.assert();
}

#[test]
fn test_push_rejected_exits_non_zero() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/push");
        then.status(500);
    });
    let dir = tempfile::tempdir().unwrap();
    let config = write_config_with_push_base(dir.path(), &server.url("/push"));

    let output = run_push(&config, "u1");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Push rejected with status 500"), "stderr: {}", stderr);
    assert!(stderr.contains("pushrelay::delivery"), "stderr: {}", stderr);
    mock.assert();
}

#[test]
fn test_push_connection_refused_exits_non_zero() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let dir = tempfile::tempdir().unwrap();
    let config =
        write_config_with_push_base(dir.path(), &format!("http://127.0.0.1:{}/push", port));

    let output = run_push(&config, "u1");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Push request failed"), "stderr: {}", stderr);
    assert!(!stderr.contains("doc="), "stderr: {}", stderr);
}

#[test]
fn test_push_empty_user_is_rejected_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/push");
        then.status(200);
    });
    let dir = tempfile::tempdir().unwrap();
    let config = write_config_with_push_base(dir.path(), &server.url("/push"));

    let output = run_push(&config, "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-empty --user and --service"), "stderr: {}", stderr);
    mock.assert_calls(0);
}
