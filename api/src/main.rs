use api::app;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::{net::SocketAddr, process};
use tracing_appender::rolling;
use util::{config, state::AppState};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file());

    // Connect and bring the schema up to date before accepting traffic
    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "Failed to connect to database");
            process::exit(1);
        }
    };
    if let Err(err) = Migrator::up(&db, None).await {
        tracing::error!(error = %err, "Failed to initialize database schema");
        process::exit(1);
    }
    tracing::info!("Database schema initialized");

    let app_state = AppState::new(db);
    let app = app(app_state, &config::cors_origins());

    let addr: SocketAddr = match format!("{}:{}", config::host(), config::port()).parse() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!(error = %err, host = %config::host(), port = config::port(), "Invalid address");
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, %addr, "Failed to bind");
            process::exit(1);
        }
    };

    tracing::info!(
        env = %config::env(),
        "Starting {} on http://{}",
        config::project_name(),
        addr
    );

    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %err, "Server crashed");
        process::exit(1);
    }
}

fn init_logging(log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter = EnvFilter::try_new(config::log_level())
        .unwrap_or_else(|_| EnvFilter::new("api=info,services=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
