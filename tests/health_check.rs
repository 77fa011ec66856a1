//! End-to-end tests for the status endpoint.
//!
//! Each test spawns the router on an ephemeral port and drives it over real
//! HTTP with reqwest, so routing, middleware, and response bodies are all
//! exercised the way a monitoring client would see them.

use std::future::IntoFuture;
use std::net::SocketAddr;

use upcheck::routes::create_router;

/// A running test server: its address plus the handle to the serve task,
/// kept so server-side failures surface in the test instead of only as
/// opaque client-side connection errors.
struct TestApp {
    addr: SocketAddr,
    server: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl TestApp {
    /// Panics with the serve task's own outcome if it has exited.
    async fn assert_server_alive(&mut self) {
        if self.server.is_finished() {
            let outcome = (&mut self.server).await;
            panic!("server task exited early: {outcome:?}");
        }
    }
}

/// Spawn the application on an ephemeral local port.
async fn spawn_app() -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");

    let app = create_router();
    let server = tokio::spawn(axum::serve(listener, app).into_future());

    TestApp { addr, server }
}

#[tokio::test]
async fn get_root_returns_running_message() {
    let mut app = spawn_app().await;

    let response = reqwest::get(format!("http://{}/", app.addr))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "Application is running fine 👍");

    app.assert_server_alive().await;
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let mut app = spawn_app().await;

    let response = reqwest::get(format!("http://{}/missing", app.addr))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);

    app.assert_server_alive().await;
}

#[tokio::test]
async fn post_to_root_is_method_not_allowed() {
    let mut app = spawn_app().await;

    // Only GET is registered on "/"; axum's default for a method mismatch
    // on a known path is 405 rather than 404
    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/", app.addr))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 405);

    app.assert_server_alive().await;
}

#[tokio::test]
async fn repeated_requests_get_the_same_response() {
    let mut app = spawn_app().await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let response = client
            .get(format!("http://{}/", app.addr))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200);
        let body = response.text().await.expect("Failed to read body");
        assert_eq!(body, "Application is running fine 👍");
    }

    app.assert_server_alive().await;
}
