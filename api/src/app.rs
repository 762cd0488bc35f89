//! Application factory
//!
//! This module provides the factory for creating the actix-web application
//! with all middleware and routes wired up.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::otp::{send_otp, verify_otp, AppState};

use jb_core::services::otp::NotifierTrait;

/// Create and configure the application with all dependencies
pub fn create_app<N>(
    app_state: web::Data<AppState<N>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    N: NotifierTrait + 'static,
{
    let cors = create_cors();
    let security = SecurityMiddleware::new();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (order matters: security first, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP routes
        .service(
            web::scope("/otp")
                .route("/send", web::post().to(send_otp::<N>))
                .route("/verify", web::post().to(verify_otp::<N>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "jobbe-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
