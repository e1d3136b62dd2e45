use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use salvo::{listener::TcpListener, Server};
use url::Url;

use user_service::domain::repository::UserStore;
use user_service::infra::router;

static NEXT_PORT: AtomicU16 = AtomicU16::new(18181);

/// Serves the api over a fresh store on a port of its own, returning the
/// service url once the listener accepts connections.
pub async fn spawn_api<S: UserStore + Send + Sync + 'static>(store: S) -> Url {
    let port = NEXT_PORT.fetch_add(1, Ordering::SeqCst);
    let address = format!("127.0.0.1:{port}");

    let store = Arc::new(RwLock::new(store));
    let listener = TcpListener::bind(&address);
    tokio::spawn(Server::new(listener).serve(router::app(store)));

    wait_listening(&address).await;

    Url::parse(format!("http://{address}").as_str()).expect("Expect a valid service url")
}

async fn wait_listening(address: &str) {
    for _ in 0..100 {
        if tokio::net::TcpStream::connect(address).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    panic!("service at {address} did not start listening");
}

pub fn create_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.append("accept", HeaderValue::from_static("application/json"));

    let keep_alive = 1000 * 60 * 60; // 1 hours
    let connect_timeout = 1000 * 5; // 5 sec
    let timeout = 1000 * 10; // 10 sec

    Client::builder()
        .tcp_keepalive(Duration::from_millis(keep_alive))
        .connect_timeout(Duration::from_millis(connect_timeout))
        .timeout(Duration::from_millis(timeout))
        .pool_max_idle_per_host(5)
        .default_headers(headers)
        .brotli(true)
        .gzip(true)
        .build()
        .expect("Expect to create a http client")
}
