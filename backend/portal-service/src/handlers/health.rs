use crate::services::ChannelResolver;
use actix_web::{web, HttpResponse};

/// `GET /health` - 200 when the channel directory answers, 503 otherwise
pub async fn health(resolver: web::Data<ChannelResolver>) -> HttpResponse {
    match resolver.directory().health_check().await {
        Ok(()) => HttpResponse::Ok().body("OK"),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().body("UNAVAILABLE")
        }
    }
}
