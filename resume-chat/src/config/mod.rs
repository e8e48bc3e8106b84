//! Service configuration: BaseConfig (server + log + DB + knowledge) + AppExtensions (LLM, speech).

mod app_config;
mod base;
mod extensions;


pub use app_config::AppConfig;
pub use base::{BaseConfig, DEFAULT_MAX_UPLOAD_BYTES};
pub use extensions::{AppExtensions, BaseAppExtensions};
