/// HTTP handlers for the portal
///
/// - `pages`: home page and channel pages
/// - `search`: channel search redirect
/// - `health`: liveness against the channel directory
pub mod health;
pub mod pages;
pub mod search;

pub use health::health;
pub use pages::{home, stream};
pub use search::search;

use crate::error::{AppError, Result};
use crate::metrics;
use crate::notice::NoticeCookie;
use crate::render::{stream_page, PageContext};
use crate::services::RedirectTarget;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

/// Configure routes for the portal
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/search/", web::get().to(search))
        .route("/stream/{name}/", web::get().to(stream))
        .route("/health", web::get().to(health))
        .route("/metrics", web::get().to(metrics::serve_metrics));
}

/// 303 to `target.location`, carrying its notice in a cookie.
pub(crate) fn redirect(target: &RedirectTarget, notices: &NoticeCookie) -> Result<HttpResponse> {
    let mut builder = HttpResponse::SeeOther();
    builder
        .insert_header((header::LOCATION, target.location.as_str()))
        .insert_header((header::CACHE_CONTROL, "no-store"));

    if let Some(notice) = &target.notice {
        notices
            .attach(&mut builder, notice)
            .map_err(|e| AppError::Internal(format!("failed to encode notice: {}", e)))?;
    }

    Ok(builder.finish())
}

/// Render the stream page, clearing a consumed notice cookie when asked.
pub(crate) fn page(
    ctx: &PageContext,
    page_name: &str,
    clear_notice: Option<&NoticeCookie>,
) -> HttpResponse {
    metrics::record_render(page_name);

    let mut builder = HttpResponse::Ok();
    builder.content_type("text/html; charset=utf-8");
    if ctx.notice.is_some() || clear_notice.is_some() {
        builder.insert_header((header::CACHE_CONTROL, "no-store"));
    }
    if let Some(notices) = clear_notice {
        notices.clear(&mut builder);
    }

    builder.body(stream_page(ctx).into_string())
}
