use registry_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, config, logging
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        port = config.http_port,
        backend = config.store_backend.as_str(),
        environment = %config.environment,
        "🦀 Employee Registry starting..."
    );

    // 2. Open the store and build shared state
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
