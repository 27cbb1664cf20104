//! PayLedger HTTP server entry point.

use payledger_server::{build_app, AppState};
use payledger_core::db::open_db;
use payledger_core::{default_log_level, init_logging, PayLedgerConfig};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = PayLedgerConfig::from_env();
    if let Err(message) = init_logging(default_log_level(), config.log_dir.as_deref()) {
        eprintln!("Logging disabled: {message}");
    }

    let conn = open_db(&config.db_path)?;
    let state = AppState::new(conn);
    let app = build_app(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log::info!(
        "event=http_start module=server status=ok port={} db={}",
        config.http_port,
        config.db_path.display()
    );
    println!("Server started on http://localhost:{}", config.http_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("event=http_shutdown module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=http_shutdown module=server status=error error={err}");
        return;
    }
    log::info!("event=http_shutdown module=server status=start reason=signal");
}
