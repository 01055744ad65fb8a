//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use https_demo::{AppConfig, HttpServer, Shutdown};

/// A running test instance of the demo server.
pub struct TestApp {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Spawn the server on an ephemeral loopback port with the given config.
///
/// The listener is bound before the server task starts, so requests can
/// be issued immediately without a startup sleep.
pub async fn spawn_app(mut config: AppConfig) -> TestApp {
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener has a local addr");

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config).expect("test config is valid");

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestApp { addr, shutdown }
}

/// Spawn the server with the default configuration.
#[allow(dead_code)]
pub async fn spawn_default_app() -> TestApp {
    spawn_app(AppConfig::default()).await
}
