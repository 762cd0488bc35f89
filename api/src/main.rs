use actix_web::{web, HttpServer};
use log::info;
use std::env;
use std::sync::Arc;
use std::time::Duration;

use jb_api::app::create_app;
use jb_api::routes::otp::AppState;
use jb_core::services::otp::{OtpConfig, OtpService, OtpStore, SystemClock};
use jb_infra::config::EmailConfig;
use jb_infra::email::{create_email_service, EmailNotifierAdapter};
use jb_shared::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Jobbe API Server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let email_config = EmailConfig::from_env();

    // Wire up the OTP service: delivery channel, volatile store, manager
    let email_service = create_email_service(&email_config);
    let notifier = Arc::new(EmailNotifierAdapter::new(Arc::from(email_service)));
    info!("Email delivery provider: {}", notifier.provider_name());

    let store = Arc::new(OtpStore::new(Arc::new(SystemClock), OtpConfig::default()));
    let otp_service = Arc::new(OtpService::new(notifier, store));

    // Periodic sweep reclaims memory held by abandoned challenges; expiry
    // itself is enforced lazily at verification time either way.
    let sweep_interval_secs = env::var("OTP_SWEEP_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(300);
    if sweep_interval_secs > 0 {
        let sweeper = otp_service.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(sweep_interval_secs));
            loop {
                interval.tick().await;
                let purged = sweeper.purge_expired();
                if purged > 0 {
                    info!("Reclaimed {} expired OTP records", purged);
                }
            }
        });
    }

    let app_state = web::Data::new(AppState { otp_service });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }
    server.bind(&bind_address)?.run().await
}
