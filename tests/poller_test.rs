//! Tests for the listing poller lifecycle
//!
//! The poller must start fetching as soon as it is spawned and must stop
//! issuing requests once its handle (or the App's mount) goes away.

mod common;

use common::{listing_json, spawn_server};
use std::time::Duration;
use tokio::sync::mpsc;
use webftp_tui::api::FileServerClient;
use webftp_tui::config::Config;
use webftp_tui::model::ConnectionState;
use webftp_tui::services::{ApiResponse, ListPoller};
use webftp_tui::App;

const WAIT: Duration = Duration::from_secs(5);

fn client(base_url: &str) -> FileServerClient {
    FileServerClient::new(base_url, Duration::from_secs(2)).unwrap()
}

/// Test: The first cycle fires immediately and reports the parsed listing
#[tokio::test]
async fn test_poller_delivers_first_cycle_immediately() {
    let server = spawn_server(|_| (200, listing_json(&[("a.txt", 1024)]))).await;
    let (tx, mut rx) = mpsc::unbounded_channel();

    // A long period proves the first tick does not wait for it
    let _poller = ListPoller::spawn(client(&server.base_url), Duration::from_secs(60), tx);

    let response = tokio::time::timeout(WAIT, rx.recv())
        .await
        .expect("first cycle should not wait a full period")
        .expect("channel open");

    match response {
        ApiResponse::ListResult { files } => {
            let files = files.unwrap();
            assert_eq!(files.len(), 1);
            assert_eq!(files[0].name, "a.txt");
            assert_eq!(files[0].size, 1024);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

/// Test: Failed cycles are reported and polling keeps going
#[tokio::test]
async fn test_poller_reports_failures_and_continues() {
    let server = spawn_server(|_| (503, String::new())).await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _poller = ListPoller::spawn(client(&server.base_url), Duration::from_millis(50), tx);

    for _ in 0..2 {
        let response = tokio::time::timeout(WAIT, rx.recv()).await.unwrap().unwrap();
        match response {
            ApiResponse::ListResult { files } => {
                let err = files.unwrap_err();
                assert!(err.to_string().starts_with("HTTP 503"), "got: {}", err);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}

/// Test: Dropping the handle aborts the task and closes the channel
#[tokio::test]
async fn test_dropping_poller_stops_task() {
    let server = spawn_server(|_| (200, listing_json(&[]))).await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let poller = ListPoller::spawn(client(&server.base_url), Duration::from_millis(50), tx);

    tokio::time::timeout(WAIT, rx.recv()).await.unwrap().unwrap();
    assert!(poller.is_running());
    drop(poller);

    // The aborted task drops its sender; buffered results drain, then None
    let closed = tokio::time::timeout(WAIT, async {
        while rx.recv().await.is_some() {}
    })
    .await;
    assert!(closed.is_ok(), "channel should close after the poller is dropped");
}

/// Test: Mounting populates the listing and the server identity
#[tokio::test]
async fn test_mount_populates_listing() {
    let server = spawn_server(|request| {
        if request.path == "/v1/echo" {
            (
                200,
                r#"{"version":"1.2.0","app_name":"webftp","current_time":"2024-01-01T00:00:00Z","current_host":"nas","client_ip":"127.0.0.1"}"#
                    .to_string(),
            )
        } else {
            (200, listing_json(&[("b.txt", 2048), ("a.txt", 1024)]))
        }
    })
    .await;

    let config = Config {
        base_url: server.base_url.clone(),
        ..Config::default()
    };
    let mut app = App::new(&config).unwrap();
    assert_eq!(app.model.listing.connection_state, ConnectionState::Connecting);

    app.mount();
    assert!(app.is_mounted());

    tokio::time::timeout(WAIT, async {
        while app.model.listing.files.is_empty() || app.model.server_info.is_none() {
            app.process_next_response().await;
        }
    })
    .await
    .expect("listing and server info should arrive");

    let names: Vec<_> = app.model.listing.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
    assert_eq!(app.model.listing.connection_state, ConnectionState::Connected);
    assert_eq!(app.model.server_info.as_ref().unwrap().app_name, "webftp");

    app.unmount();
}

/// Test: After unmount no further list requests reach the server
#[tokio::test]
async fn test_unmount_stops_requests() {
    let mut server = spawn_server(|request| {
        if request.path == "/v1/echo" {
            (404, String::new())
        } else {
            (200, listing_json(&[("a.txt", 1)]))
        }
    })
    .await;

    let config = Config {
        base_url: server.base_url.clone(),
        poll_interval_ms: 50,
        ..Config::default()
    };
    let mut app = App::new(&config).unwrap();
    app.mount();

    // Let a few cycles run
    tokio::time::sleep(Duration::from_millis(300)).await;
    app.unmount();
    assert!(!app.is_mounted());

    // Anything already on the wire may still land
    tokio::time::sleep(Duration::from_millis(200)).await;
    let before: Vec<_> = server.drain();
    assert!(
        before.iter().any(|r| r.path == "/files/list"),
        "poller should have run while mounted"
    );

    tokio::time::sleep(Duration::from_millis(300)).await;
    let after = server.drain();
    assert!(
        after.iter().all(|r| r.path != "/files/list"),
        "no list requests expected after unmount, got {}",
        after.len()
    );
}
