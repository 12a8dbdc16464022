use growthcalc_server::{api, config::Config, main_lib};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    main_lib::init_tracing(config.log_format);

    let state = main_lib::build_state(&config);
    let app = api::app_router(state, &config);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Growth projection server listening on http://{}", config.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutting down");
}
