//! Texnouz Ijara server binary
//!
//! Property-rental management REST API. Reads configuration from a TOML
//! file (~/.config/texnouz-ijara/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use texnouz_ijara::application::{
    BillingService, DashboardService, LedgerService, NotificationService, PropertyService,
    TenantService,
};
use texnouz_ijara::config::AppConfig;
use texnouz_ijara::domain::{RepositoryProvider, User, UserRole};
use texnouz_ijara::infrastructure::crypto::jwt::JwtConfig;
use texnouz_ijara::infrastructure::database::migrator::Migrator;
use texnouz_ijara::infrastructure::SmtpMailer;
use texnouz_ijara::{
    create_api_router, default_config_path, init_database, DatabaseConfig, RouterContext,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("IJARA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Texnouz Ijara...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("Prometheus metrics recorder installed");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        verification_expiration_hours: app_cfg.security.verification_token_hours,
        issuer: "texnouz-ijara".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Initialize repository provider
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Create default admin user if not exists
    create_default_admin(&repos, &app_cfg).await;

    // ── Email transport ────────────────────────────────────────
    let mailer = match SmtpMailer::new(app_cfg.email.clone()) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            error!("Failed to build SMTP transport: {}", e);
            return Err(e.into());
        }
    };
    if app_cfg.email.enabled {
        info!("SMTP relay configured: {}", app_cfg.email.smtp_host);
    } else {
        warn!("Email disabled; verification and bill emails will be skipped");
    }

    // ── Services ───────────────────────────────────────────────
    let notifications = Arc::new(NotificationService::new(mailer, app_cfg.email.clone()));
    let property = Arc::new(PropertyService::new(repos.clone()));
    let tenants = Arc::new(TenantService::new(repos.clone()));
    let billing = Arc::new(BillingService::new(repos.clone()));
    let ledger = Arc::new(LedgerService::new(repos.clone()));
    let dashboard = Arc::new(DashboardService::new(repos.clone(), property.clone()));

    // ── REST API router ────────────────────────────────────────
    let api_router = create_api_router(
        RouterContext {
            repos,
            db: db.clone(),
            jwt_config,
            notifications,
            property,
            tenants,
            billing,
            ledger,
            dashboard,
            prometheus_handle,
        },
        &app_cfg,
    );

    let api_addr = format!("{}:{}", app_cfg.server.api_host, app_cfg.server.api_port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let server = axum::serve(
        listener,
        api_router.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal());

    info!("Server started. Press Ctrl+C to shutdown gracefully.");

    if let Err(e) = server.await {
        error!("REST API server error: {}", e);
    }

    // Perform final cleanup
    info!("Performing final cleanup...");

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Texnouz Ijara shutdown complete");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

/// Create default admin user if no users exist
async fn create_default_admin(repos: &Arc<dyn RepositoryProvider>, app_cfg: &AppConfig) {
    use texnouz_ijara::infrastructure::crypto::password::hash_password;

    let users_count = repos.users().count().await.unwrap_or(0);

    if users_count == 0 {
        info!("Creating default admin user...");

        let password_hash = match hash_password(&app_cfg.admin.password) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Failed to hash admin password: {}", e);
                return;
            }
        };

        let now = chrono::Utc::now();
        let admin = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: app_cfg.admin.username.clone(),
            email: app_cfg.admin.email.clone(),
            password_hash,
            role: UserRole::Admin,
            is_active: true,
            email_verified: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };

        match repos.users().save(admin).await {
            Ok(saved) => {
                info!("Default admin created: {}", saved.email);
                warn!("Please change the admin password immediately!");
            }
            Err(e) => {
                error!("Failed to create admin user: {}", e);
            }
        }
    }
}
