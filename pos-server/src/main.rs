use pos_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("POS server starting...");

    // 2. Initialize server state (catalog, tables, order store)
    let state = ServerState::initialize(&config);

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
