mod command;
mod config;
mod geometry;
mod page;
mod publish;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let broker = config::BrokerConfig::from_env();
    tracing::info!(host = %broker.host, broker_port = broker.port, topic = %broker.topic, "broker configured");

    let publisher = Arc::new(publish::MqttPublisher::new(broker.clone()));
    let state = state::AppState::new(broker, publisher);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "botpatrol listening");
    axum::serve(listener, app).await.expect("server failed");
}
