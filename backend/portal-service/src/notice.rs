//! One-shot notices carried across a redirect.
//!
//! The redirect response sets a short-lived cookie holding the notice; the
//! next page render reads it, shows it and clears the cookie.

use crate::config::NoticeSettings;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponseBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// A message shown once after a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Search found nothing for `query`.
    pub fn search_miss(query: &str) -> Self {
        Self::warning(format!(
            "Channel '{}' was not found. Check the name and try again.",
            query
        ))
    }

    /// Direct navigation to a channel that does not exist.
    pub fn unknown_channel(name: &str) -> Self {
        Self::error(format!("Channel '{}' does not exist.", name))
    }

    /// Cookie-safe encoding of the notice.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(urlencoding::encode(&json).into_owned())
    }

    /// Inverse of [`Notice::encode`]; `None` for anything that does not decode.
    ///
    /// The cookie layer may already have percent-decoded the value, or
    /// encoded it once more, so decoding stops as soon as the JSON parses.
    pub fn decode(raw: &str) -> Option<Self> {
        let mut current = raw.to_string();
        for _ in 0..3 {
            if let Ok(notice) = serde_json::from_str(&current) {
                return Some(notice);
            }
            let decoded = urlencoding::decode(&current).ok()?.into_owned();
            if decoded == current {
                return None;
            }
            current = decoded;
        }
        None
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.as_str(), self.message)
    }
}

/// Reads and writes the notice cookie
#[derive(Debug, Clone)]
pub struct NoticeCookie {
    settings: NoticeSettings,
}

impl NoticeCookie {
    pub fn new(settings: NoticeSettings) -> Self {
        Self { settings }
    }

    pub fn name(&self) -> &str {
        &self.settings.cookie_name
    }

    /// Attach `notice` to a response that is about to redirect.
    pub fn attach(
        &self,
        builder: &mut HttpResponseBuilder,
        notice: &Notice,
    ) -> Result<(), serde_json::Error> {
        let cookie = Cookie::build(self.settings.cookie_name.clone(), notice.encode()?)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(self.settings.max_age_secs))
            .finish();
        builder.cookie(cookie);
        Ok(())
    }

    /// Notice pending on this request, if any.
    ///
    /// Returns `(notice, present)`: `present` is true whenever the cookie
    /// exists, even if it failed to decode, so the caller can clear it.
    pub fn take(&self, req: &HttpRequest) -> (Option<Notice>, bool) {
        match req.cookie(&self.settings.cookie_name) {
            Some(cookie) => {
                let notice = Notice::decode(cookie.value());
                if notice.is_none() {
                    tracing::debug!("discarding undecodable notice cookie");
                }
                (notice, true)
            }
            None => (None, false),
        }
    }

    /// Remove the notice cookie on the response that displayed it.
    pub fn clear(&self, builder: &mut HttpResponseBuilder) {
        let mut cookie = Cookie::build(self.settings.cookie_name.clone(), "")
            .path("/")
            .finish();
        cookie.make_removal();
        builder.cookie(cookie);
    }
}
