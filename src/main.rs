use guesty_dashboard::{
    config::{AppConfig, AppEnv},
    serve,
    services::store::connect_from_config,
    utils::{constant::SERVICE_NAME, shutdown::shutdown_signal, telemetry::init_tracing},
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Subscriber first, so configuration warnings are not lost
    init_tracing(AppEnv::from_env());
    let config = AppConfig::from_env();

    info!("Starting {SERVICE_NAME}");

    let store = connect_from_config(&config).await;

    let listener = TcpListener::bind(config.bind_address()).await?;
    serve(listener, store, &config.static_dir, shutdown_signal()).await?;

    Ok(())
}
