//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AssetGatewayConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, RateLimitConfig, ServerConfig,
};
