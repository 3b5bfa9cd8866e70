use std::process::ExitCode;

use moyens_api::{
    AppConfig, StartupError, build_app,
    config::BIND_ADDRESS,
    database, logging,
};
use tracing::Instrument;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            // No subscriber yet: the log settings are part of what failed.
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let span = logging::service_span(&config.logging);
    match run(config).instrument(span).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    let db = database::connect(&config.database).await?;
    let app = build_app(db.clone(), &config.http);

    let listener = tokio::net::TcpListener::bind(BIND_ADDRESS)
        .await
        .map_err(|source| StartupError::Bind {
            address: BIND_ADDRESS.to_string(),
            source,
        })?;
    tracing::info!(address = BIND_ADDRESS, "Server listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve);

    database::shutdown(db).await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown requested, draining in-flight requests");
}
