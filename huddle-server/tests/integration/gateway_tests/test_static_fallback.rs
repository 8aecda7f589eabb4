use huddle_server::ServerConfig;
use std::fs;

use crate::integration::{init_tracing, spawn_server_with};
use crate::utils::WsTestClient;

const INDEX: &str = "<!doctype html><div id=\"app\"></div>";
const SCRIPT: &str = "console.log('app');";

#[tokio::test]
async fn test_static_fallback() {
    init_tracing();

    let dist = tempfile::tempdir().expect("Temp dir");
    fs::write(dist.path().join("index.html"), INDEX).expect("Write index");
    fs::create_dir(dist.path().join("assets")).expect("Create assets");
    fs::write(dist.path().join("assets/app.js"), SCRIPT).expect("Write script");

    let config = ServerConfig {
        static_dir: Some(dist.path().to_path_buf()),
        ..ServerConfig::default()
    };
    let (addr, _service) = spawn_server_with(config).await;
    let client = reqwest::Client::new();

    let get = |path: &str| client.get(format!("http://{addr}{path}")).send();

    let response = get("/some/deep/route").await.expect("Request failed");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.expect("Body"), INDEX);

    let response = get("/assets/app.js").await.expect("Request failed");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.expect("Body"), SCRIPT);

    let response = get("/health").await.expect("Request failed");
    assert_eq!(response.text().await.expect("Body"), "OK");

    let ws = WsTestClient::connect(addr)
        .await
        .expect("Signaling socket should still be routed");
    ws.close().await.expect("Close failed");
}
