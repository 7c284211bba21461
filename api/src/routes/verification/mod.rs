//! Handler for POST /api/v1/email-verification
//!
//! One endpoint serves both protocol operations, selected by the `action`
//! field, mirroring the registration form's single verification call site.

use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::verification::VerificationRequest;
use crate::handlers::error::{bad_request, domain_error_response};

use sv_core::services::verification::{
    EmailSenderTrait, RecordStoreTrait, VerificationService,
};
use sv_shared::types::response::ApiResponse;
use sv_shared::utils::email::mask_email;

/// Application state that holds shared services
pub struct AppState<M, R>
where
    M: EmailSenderTrait,
    R: RecordStoreTrait,
{
    pub verification_service: Arc<VerificationService<M, R>>,
}

/// Handler for POST /api/v1/email-verification
///
/// # Request Body
///
/// ```json
/// { "email": "founder@startup.io", "action": "generate" }
/// { "email": "founder@startup.io", "action": "verify", "code": "123456" }
/// ```
///
/// # Responses
///
/// - 200 `{"success": true}` - code generated and sent
/// - 200 `{"success": true, "message": "Email verified successfully"}` - verified
/// - 400 `{"error": "..."}` - validation failure, no pending code, expired
///   code, attempt ceiling, or code mismatch
/// - 500 `{"error": "..."}` - delivery or internal failure
pub async fn email_verification<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    request: web::Json<VerificationRequest>,
) -> HttpResponse
where
    M: EmailSenderTrait + 'static,
    R: RecordStoreTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    let email = match request.email.as_deref() {
        Some(email) if !email.trim().is_empty() => email,
        _ => {
            log::warn!("[{}] Verification request missing email", request_id);
            return bad_request("Email is required");
        }
    };

    if request.validate().is_err() {
        log::warn!(
            "[{}] Invalid email format: {}",
            request_id,
            mask_email(email)
        );
        return bad_request("Invalid email format");
    }

    match request.action.as_deref() {
        Some("generate") => {
            log::info!(
                "[{}] Generating verification code for: {}",
                request_id,
                mask_email(email)
            );

            match state.verification_service.generate(email).await {
                Ok(result) => {
                    log::info!(
                        "[{}] Verification code sent to: {}, message_id: {}",
                        request_id,
                        mask_email(email),
                        result.message_id
                    );
                    HttpResponse::Ok().json(ApiResponse::success())
                }
                Err(error) => {
                    log::error!(
                        "[{}] Failed to send verification code to: {}, error: {}",
                        request_id,
                        mask_email(email),
                        error
                    );
                    domain_error_response(&error)
                }
            }
        }
        Some("verify") => {
            let code = match request.code.as_deref() {
                Some(code) if !code.trim().is_empty() => code,
                _ => {
                    log::warn!(
                        "[{}] Verify request missing code for: {}",
                        request_id,
                        mask_email(email)
                    );
                    return bad_request("Verification code is required");
                }
            };

            match state.verification_service.verify(email, code).await {
                Ok(result) => {
                    log::info!("[{}] Email verified: {}", request_id, mask_email(email));
                    HttpResponse::Ok().json(ApiResponse::success_with_message(result.message))
                }
                Err(error) => {
                    log::warn!(
                        "[{}] Verification failed for: {}, error: {}",
                        request_id,
                        mask_email(email),
                        error
                    );
                    domain_error_response(&error)
                }
            }
        }
        _ => {
            log::warn!(
                "[{}] Invalid action {:?} from {}",
                request_id,
                request.action,
                req.path()
            );
            bad_request("Invalid action")
        }
    }
}
