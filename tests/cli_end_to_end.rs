use assert_cmd::Command;
use mockito::{Matcher, Server, ServerGuard};
use predicates::str::contains;
use tempfile::TempDir;

const POSTS_PAGE_ONE: &str = r#"{
    "data": [
        {"id": 1, "title": "Hello", "content": "First post", "category": {"id": 1, "name": "Rust"},
         "tags": [{"id": 2, "name": "cli"}], "published": true, "userId": 1},
        {"id": 2, "title": "Again", "content": "Second post", "tags": []}
    ],
    "totalPages": 2
}"#;

fn mock_reference_data(server: &mut ServerGuard) {
    server
        .mock("GET", "/categories")
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "Rust"}]"#)
        .create();
    server
        .mock("GET", "/tags")
        .with_status(200)
        .with_body(r#"[{"id": 2, "name": "cli"}]"#)
        .create();
}

fn postboard(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.env_remove("POSTBOARD_BASE_API_URL")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir.path().join("config.json"));
    cmd
}

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("Terminal client for a blog posts REST API"))
        .stdout(contains("Usage: postboard"));
}

#[test]
fn test_create_missing_required_args() {
    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.args(["create", "--title", "Only title"])
        .assert()
        .failure()
        .stderr(contains("required"));
}

#[test]
fn test_list_without_base_url() {
    let config_dir = TempDir::new().unwrap();
    postboard(&config_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("No base API url"));
}

#[test]
fn test_list_first_page() {
    let mut server = Server::new();
    mock_reference_data(&mut server);
    let posts = server
        .mock("GET", "/posts")
        .match_query(Matcher::UrlEncoded("page".to_string(), "1".to_string()))
        .with_status(200)
        .with_body(POSTS_PAGE_ONE)
        .create();

    let config_dir = TempDir::new().unwrap();
    postboard(&config_dir)
        .args(["list", "--base-url", &server.url()])
        .assert()
        .success()
        .stdout(contains("#1 Hello"))
        .stdout(contains("  Category: Rust"))
        .stdout(contains("#2 Again"))
        .stdout(contains("(< Previous)  Page 1 of 2  [Next >]"));
    posts.assert();
}

#[test]
fn test_list_uses_config_file() {
    let mut server = Server::new();
    mock_reference_data(&mut server);
    server
        .mock("GET", "/posts")
        .match_query(Matcher::UrlEncoded("page".to_string(), "1".to_string()))
        .with_status(200)
        .with_body(POSTS_PAGE_ONE)
        .create();

    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.json"),
        format!(r#"{{"base_api_url": "{}"}}"#, server.url()),
    )
    .unwrap();

    postboard(&config_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("#1 Hello"));
}

#[test]
fn test_delete_failure_changes_nothing() {
    let mut server = Server::new();
    mock_reference_data(&mut server);
    server
        .mock("GET", "/posts")
        .match_query(Matcher::UrlEncoded("page".to_string(), "1".to_string()))
        .with_status(200)
        .with_body(POSTS_PAGE_ONE)
        .create();
    let delete = server.mock("DELETE", "/posts/1").with_status(500).create();

    let config_dir = TempDir::new().unwrap();
    postboard(&config_dir)
        .args(["delete", "1", "--base-url", &server.url()])
        .assert()
        .success()
        .stdout(contains("Nothing changed"))
        .stdout(contains("#1 Hello"))
        .stderr(contains("Error deleting post 1"));
    delete.assert();
}

#[test]
fn test_shell_session() {
    let mut server = Server::new();
    mock_reference_data(&mut server);
    server
        .mock("GET", "/posts")
        .match_query(Matcher::UrlEncoded("page".to_string(), "1".to_string()))
        .with_status(200)
        .with_body(POSTS_PAGE_ONE)
        .create();
    let update = server
        .mock("PUT", "/posts/2")
        .match_body(Matcher::PartialJson(serde_json::json!({"title": "Renamed"})))
        .with_status(200)
        .with_body(r#"{"id": 2, "title": "Renamed", "content": "Second post"}"#)
        .create();

    let config_dir = TempDir::new().unwrap();
    postboard(&config_dir)
        .args(["shell", "--base-url", &server.url()])
        .write_stdin("edit 2\ntitle Renamed\nsubmit\nquit\n")
        .assert()
        .success()
        .stdout(contains("[Update]"))
        .stdout(contains("Update done"));
    update.assert();
}
