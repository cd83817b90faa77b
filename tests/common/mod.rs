#![allow(dead_code)]

use axum::Router;
use phonebook::prelude::{AppState, ContactStore, build_router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

/// Serves the API on an ephemeral port inside the current runtime.
pub async fn spawn_server(store: Arc<dyn ContactStore>) -> String {
    spawn_app(build_router(AppState::new(store))).await
}

pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    format!("http://{addr}")
}

/// Serves the API from a dedicated thread with its own runtime, for
/// blocking tests that drive the binary.
pub fn spawn_server_thread(store: Arc<dyn ContactStore>) -> String {
    let (tx, rx) = mpsc::channel::<SocketAddr>();
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind listener");
            tx.send(listener.local_addr().expect("local addr"))
                .expect("send addr");
            let app = build_router(AppState::new(store));
            axum::serve(listener, app).await.expect("serve app");
        });
    });
    let addr = rx.recv().expect("server addr");
    format!("http://{addr}")
}
