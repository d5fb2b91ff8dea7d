//! In-process stand-in for the remote catalog API.

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct MockApi {
    addr: SocketAddr,
}

impl MockApi {
    /// Serves `router` on a free loopback port for the rest of the test.
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock api");
        let addr = listener.local_addr().expect("mock api addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock api crashed");
        });
        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// A base URL nobody is listening on.
    pub fn unused_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/api")
    }
}
