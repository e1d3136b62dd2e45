use std::sync::{Arc, RwLock};

use salvo::{listener::TcpListener, Server};

use user_service::config::env_var;
use user_service::infra::{router, store::MemoryUserStore};

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() {
    setup_tracing();

    let env = env_var::get();
    let store = Arc::new(RwLock::new(MemoryUserStore::seeded(env.seed_users)));

    let address = format!("0.0.0.0:{}", env.port);
    tracing::info!(%address, seed_users = env.seed_users, "user api listening");

    let listener = TcpListener::bind(&address);
    Server::new(listener).serve(router::app(store)).await;
}
