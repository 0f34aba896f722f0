/// Portal Service Library
///
/// Public front end for live channels. Reads channel state from a database
/// owned by the streaming panel, derives playback URLs, and renders the
/// video page. The service never writes to that database.
///
/// # Modules
///
/// - `config`: Configuration loaded from the environment
/// - `db`: Read-only channel directory over the shared schema
/// - `services`: URL composition and channel resolution
/// - `notice`: One-shot notices carried across redirects
/// - `render`: HTML pages
/// - `handlers`: HTTP endpoints
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod notice;
pub mod render;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
