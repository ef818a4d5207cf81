use johnson_apsp::web::server::{start_server_with_config, ServerConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional port as the first argument
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(3005)
    } else {
        3005
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    info!("starting Johnson APSP web server");
    info!("port: {}", config.port);
    info!("CORS enabled: {}", config.enable_cors);
    info!("max sessions: {}", config.max_sessions);

    start_server_with_config(config).await?;

    Ok(())
}
