/// Page handlers - the official channel and broadcaster channels
use super::{page, redirect};
use crate::error::Result;
use crate::notice::{Notice, NoticeCookie};
use crate::render::PageContext;
use crate::services::{ChannelResolver, RedirectTarget, Resolution};
use actix_web::{web, HttpRequest, HttpResponse};

/// `GET /` - official channel, plus any pending notice
pub async fn home(
    req: HttpRequest,
    resolver: web::Data<ChannelResolver>,
    notices: web::Data<NoticeCookie>,
) -> Result<HttpResponse> {
    let (notice, pending) = notices.take(&req);
    let ctx = PageContext::home(resolver.resolve_home(), notice);

    Ok(page(&ctx, "home", pending.then_some(notices.get_ref())))
}

/// `GET /stream/{name}/` - a broadcaster's channel, by exact name
pub async fn stream(
    req: HttpRequest,
    resolver: web::Data<ChannelResolver>,
    notices: web::Data<NoticeCookie>,
    name: web::Path<String>,
) -> Result<HttpResponse> {
    let name = name.into_inner();

    let stream = match resolver.resolve_by_name(&name).await? {
        Resolution::Found(stream) => stream,
        Resolution::NotFound => {
            return redirect(
                &RedirectTarget::home_with(Notice::unknown_channel(&name)),
                &notices,
            );
        }
    };

    let profile = resolver.social_profile(&name).await?;
    let (notice, pending) = notices.take(&req);
    let ctx = PageContext::channel(stream, &name, profile, notice);

    Ok(page(&ctx, "stream", pending.then_some(notices.get_ref())))
}
