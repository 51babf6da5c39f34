use std::env;

use flapcount::{DisplayConfig, DisplayController, FlapError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match env::var("FLAPCOUNT_CONFIG") {
        Ok(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to load config");
                std::process::exit(1);
            }
        },
        Err(_) => DisplayConfig::default(),
    };

    let (display, mut frames) = match DisplayController::start(config) {
        Ok(started) => started,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start display");
            std::process::exit(1);
        }
    };

    loop {
        tokio::select! {
            _ = shutdown_signal() => {
                tracing::info!("Shutdown signal received");
                display.shutdown();
                break;
            }

            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                println!("{}", frame.digits);
            }
        }
    }
}

fn load_config(path: &str) -> Result<DisplayConfig, FlapError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Resolves when the process receives a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix both signals are handled so container orchestrators trigger a
/// clean timer teardown. On non-Unix only Ctrl-C (SIGINT) is available.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c  => {}
        _ = sigterm => {}
    }
}
