//! End-to-end runs of the `holocron` binary against a local film endpoint.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use predicates::prelude::*;

const FILMS: &str = r#"{
    "count": 3,
    "next": null,
    "previous": null,
    "results": [
        {
            "title": "A New Hope",
            "episode_id": 4,
            "opening_crawl": "It is a period of civil war.\r\nRebel spaceships, striking",
            "director": "George Lucas",
            "release_date": "1977-05-25"
        },
        {
            "title": "Attack of the Clones",
            "episode_id": 2,
            "opening_crawl": "There is unrest in the Galactic\r\nSenate.",
            "director": "George Lucas",
            "release_date": "2002-05-16"
        },
        {
            "title": "The Phantom Menace",
            "episode_id": 1,
            "opening_crawl": "Turmoil has engulfed the\r\nGalactic Republic.",
            "director": "George Lucas",
            "release_date": "1999-05-19"
        }
    ]
}"#;

/// Serve `body` with `status` on a local port and return the films URL.
async fn film_server(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/api/films/",
        get(move || async move {
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test server");
    });
    format!("http://{addr}/api/films/?format=json")
}

/// The binary with an isolated config dir and no inherited settings.
fn holocron(config_home: &tempfile::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("HOLOCRON_FILMS_URL")
        .env_remove("HOLOCRON_REQUEST_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("holocron");
    let output = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("browse"), "help missing browse");
    assert!(text.contains("list"), "help missing list");
    assert!(text.contains("show"), "help missing show");
    assert!(text.contains("--url"), "help missing --url");
}

#[test]
fn list_help_documents_options() {
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--search").and(predicate::str::contains("--sort")));
}

#[test]
fn unknown_sort_key_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.args(["list", "--sort", "rating"]).assert().failure();
}

#[tokio::test(flavor = "multi_thread")]
async fn list_filters_and_sorts() {
    let url = film_server(StatusCode::OK, FILMS).await;
    let home = tempfile::tempdir().unwrap();

    holocron(&home)
        .args(["--url", &url, "list", "--search", "the", "--sort", "episode"])
        .assert()
        .success()
        .stdout(
            "EPISODE 1\tThe Phantom Menace\tYear 1999\n\
             EPISODE 2\tAttack of the Clones\tYear 2002\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn list_by_year_keeps_all_films() {
    let url = film_server(StatusCode::OK, FILMS).await;
    let home = tempfile::tempdir().unwrap();

    holocron(&home)
        .args(["--url", &url, "list", "--sort", "year"])
        .assert()
        .success()
        .stdout(
            "EPISODE 4\tA New Hope\tYear 1977\n\
             EPISODE 1\tThe Phantom Menace\tYear 1999\n\
             EPISODE 2\tAttack of the Clones\tYear 2002\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_load_prints_loading_indicator() {
    let url = film_server(StatusCode::INTERNAL_SERVER_ERROR, "upstream down").await;
    let home = tempfile::tempdir().unwrap();

    holocron(&home)
        .args(["--url", &url, "list"])
        .assert()
        .success()
        .stdout("Loading Movies.....\n")
        .stderr(predicate::str::contains("Error fetching films"));
}

#[tokio::test(flavor = "multi_thread")]
async fn show_prints_detail() {
    let url = film_server(StatusCode::OK, FILMS).await;
    let home = tempfile::tempdir().unwrap();

    holocron(&home)
        .args(["--url", &url, "show", "4"])
        .assert()
        .success()
        .stdout(
            "A New Hope\nEPISODE 4\n\nIt is a period of civil war.\nRebel spaceships, striking\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn show_unknown_episode_fails() {
    let url = film_server(StatusCode::OK, FILMS).await;
    let home = tempfile::tempdir().unwrap();

    holocron(&home)
        .args(["--url", &url, "show", "9"])
        .assert()
        .failure()
        .stdout("No Movie selected\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn config_file_supplies_url() {
    let url = film_server(StatusCode::OK, FILMS).await;
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("custom.json");
    std::fs::write(&config, format!(r#"{{ "films_url": "{url}" }}"#)).unwrap();

    holocron(&home)
        .arg("--config")
        .arg(&config)
        .args(["list", "--search", "hope"])
        .assert()
        .success()
        .stdout("EPISODE 4\tA New Hope\tYear 1977\n");
}

#[test]
fn missing_config_file_is_reported() {
    let home = tempfile::tempdir().unwrap();
    holocron(&home)
        .args(["--config", "/definitely/not/here.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file"));
}
