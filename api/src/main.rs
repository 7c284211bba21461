use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::env;
use std::io;
use std::sync::Arc;

use sv_api::app::create_app;
use sv_api::routes::verification::AppState;
use sv_core::services::verification::{
    EmailSenderTrait, RecordStoreTrait, VerificationService, VerificationServiceConfig,
};
use sv_infra::cache::{InMemoryRecordStore, RedisClient, RedisRecordStore};
use sv_infra::email::{MockEmailService, ResendConfig, ResendEmailService};
use sv_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting StartupVista API server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Environment: {}", config.environment);
    info!("Server will bind to: {}", bind_address);

    // Select the record store. Redis is the default; the in-memory store is
    // only safe for a single instance and does not survive restarts.
    let store_kind = env::var("RECORD_STORE").unwrap_or_else(|_| "redis".to_string());
    let store: Box<dyn RecordStoreTrait> = match store_kind.as_str() {
        "memory" => {
            info!("Using in-memory record store (single-instance only)");
            Box::new(InMemoryRecordStore::new())
        }
        _ => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            info!("Using Redis record store");
            Box::new(RedisRecordStore::new(
                client,
                config.verification.code_expiration_minutes,
            ))
        }
    };

    // Select the email sender
    let mailer: Box<dyn EmailSenderTrait> = if config.email.use_mock() {
        info!("Using mock email service (codes are logged, not sent)");
        Box::new(MockEmailService::new())
    } else {
        let resend_config = ResendConfig::from_email_config(
            &config.email,
            config.verification.code_expiration_minutes,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        let service = ResendEmailService::new(resend_config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        Box::new(service)
    };

    let verification_service = Arc::new(VerificationService::new(
        Arc::new(mailer),
        Arc::new(store),
        VerificationServiceConfig {
            code_expiration_minutes: config.verification.code_expiration_minutes,
            max_attempts: config.verification.max_attempts,
        },
    ));

    let app_state = web::Data::new(AppState {
        verification_service,
    });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
