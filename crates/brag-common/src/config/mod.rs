//! Configuration loading

pub mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, FeedConfig, JwtConfig,
    RateLimitConfig, ServerConfig, SnowflakeConfig,
};
