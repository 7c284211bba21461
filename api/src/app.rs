//! Application factory
//!
//! Builds the Actix-web application from an already-wired application
//! state, so the binary and the integration tests construct the exact same
//! route table and middleware stack.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::verification::{email_verification, AppState};

use sv_core::services::verification::{EmailSenderTrait, RecordStoreTrait};

/// Create and configure the application with all dependencies
pub fn create_app<M, R>(
    app_state: web::Data<AppState<M, R>>,
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
    M: EmailSenderTrait + 'static,
    R: RecordStoreTrait + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route(
                    "/email-verification",
                    web::post().to(email_verification::<M, R>),
                )
                .route("/", web::get().to(api_info)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "startup-vista-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "StartupVista API v1",
        "endpoints": {
            "health": "/health",
            "email_verification": {
                "path": "/api/v1/email-verification",
                "method": "POST",
                "description": "Generate or verify an email verification code",
                "request_body": {
                    "email": "string",
                    "action": "\"generate\" or \"verify\"",
                    "code": "string (verify only, 6 digits)"
                },
                "responses": {
                    "200": "Code sent, or email verified",
                    "400": "Validation failure, unknown/expired code, or attempt ceiling",
                    "500": "Delivery or internal failure"
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
