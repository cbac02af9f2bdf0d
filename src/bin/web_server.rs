use spt_engine::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // The only argument is an optional port
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => ServerConfig::default().port,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting SPT engine web server...");
    println!("Configuration:");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   Max graph size: {} vertices, {} edges", config.max_vertices, config.max_edges);
    println!();

    start_server(config).await?;

    Ok(())
}
