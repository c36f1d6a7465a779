use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    env_logger::init();

    let addr: SocketAddr = std::env::var("ATOMLAB_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    let app = atomlab::server::router();
    log::info!("serving on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
