#[tokio::main]
async fn main() {
    shelf_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = shelf_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind BIND_ADDR");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
