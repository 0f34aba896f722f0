/// Search handler - redirects to a channel page or back home
use super::redirect;
use crate::error::Result;
use crate::notice::NoticeCookie;
use crate::services::ChannelResolver;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET /search/?q=<name>`
pub async fn search(
    resolver: web::Data<ChannelResolver>,
    notices: web::Data<NoticeCookie>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    let query = params.q.as_deref().unwrap_or_default();
    let target = resolver.search(query).await?;
    redirect(&target, &notices)
}
