//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, GeneratorConfig, GeneratorProvider, LogFormat, LoggingConfig,
    MetricsConfig, OpenAiConfig, ServerConfig,
};
