use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sitebooks::config::{Config, LogFormat};
use sitebooks::middleware::{json_error_handler, RequestId};
use sitebooks::{configure_routes, TotalsService};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Largest accepted request body; a few thousand line items fit comfortably
const MAX_JSON_BYTES: usize = 1024 * 1024;

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("sitebooks={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Sitebooks totals service");
    tracing::info!(environment = %config.app.env, "Environment");
    tracing::info!(
        vat_mode = %config.documents.vat_mode,
        retention_percent = %config.documents.retention_percent,
        cis_percent = %config.documents.cis_percent,
        "Document defaults"
    );

    let totals_service = web::Data::new(TotalsService::new(config.documents));
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(totals_service.clone())
            .app_data(
                web::JsonConfig::default()
                    .limit(MAX_JSON_BYTES)
                    .error_handler(json_error_handler),
            )
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!(address = %bind_address, workers = config.server.workers, "Server started");

    server.await.context("Server terminated with an error")
}
