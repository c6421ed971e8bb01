use st_auth::{CredentialService, IssueRateLimiter, RateLimitConfig, SqliteAuthStore};
use st_core::Identity;
use st_db::UserRepository;
use st_server::error::{Result as ServerErrorResult, ServerError};
use st_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = st_config::Config::load()?;
    config.validate()?;

    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let log_dir = st_config::Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting st-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = st_db::connect(&config.database_path()?).await?;
    st_db::run_migrations(&pool).await?;

    if let Some(ref email) = config.auth.bootstrap_admin_email {
        ensure_admin(&pool, email).await?;
    }

    let store = Arc::new(SqliteAuthStore::new(pool.clone()));
    let issue_limiter = IssueRateLimiter::new(RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window_secs: config.rate_limit.window_secs,
    });

    if !config.auth.enforce_record_ownership {
        warn!("Record ownership NOT enforced - sellers and buyers can modify each other's records");
    }

    let app_state = AppState {
        pool,
        credentials: Arc::new(CredentialService::with_hs256(config.auth.secret_bytes())),
        identities: store.clone(),
        owners: store,
        issue_limiter: Arc::new(issue_limiter),
        enforce_record_ownership: config.auth.enforce_record_ownership,
    };

    // Expired limiter keys are pruned once per window
    let limiter = app_state.issue_limiter.clone();
    let prune_every = std::time::Duration::from_secs(config.rate_limit.window_secs.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(prune_every);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Ensure the configured email exists with the Admin role
async fn ensure_admin(pool: &sqlx::SqlitePool, email: &str) -> ServerErrorResult<()> {
    let repo = UserRepository::new(pool.clone());
    let result = repo
        .ensure_role(&Identity::admin(email))
        .await
        .map_err(|e| ServerError::Bootstrap {
            email: email.to_string(),
            message: e.to_string(),
        })?;

    if result.modified_count > 0 {
        info!("Bootstrap admin ensured: {}", email);
    }
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
