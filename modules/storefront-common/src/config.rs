use std::env;
use std::path::PathBuf;

use crate::error::StorefrontError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Catalog
    pub catalog_dir: PathBuf,

    // Postgres (None = in-memory review store)
    pub database_url: Option<String>,

    // Auth
    pub jwt_secret: String,
    pub jwt_issuer: String,

    // Seed for the homepage testimonials
    pub testimonial_seed: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, StorefrontError> {
        let web_port = env::var("WEB_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| StorefrontError::Config("WEB_PORT must be a number".to_string()))?;

        Ok(Self {
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port,
            catalog_dir: env::var("CATALOG_DIR")
                .unwrap_or_else(|_| "data/imports".to_string())
                .into(),
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.trim().is_empty()),
            jwt_secret: required_env("JWT_SECRET")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "storefront".to_string()),
            testimonial_seed: env::var("TESTIMONIAL_SEED").unwrap_or_else(|_| "global".to_string()),
        })
    }

    /// Config with fixed values and no environment access.
    pub fn for_tests() -> Self {
        Self {
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            catalog_dir: PathBuf::from("data/imports"),
            database_url: None,
            jwt_secret: "test-secret".to_string(),
            jwt_issuer: "storefront".to_string(),
            testimonial_seed: "global".to_string(),
        }
    }
}

fn required_env(key: &str) -> Result<String, StorefrontError> {
    env::var(key)
        .map_err(|_| StorefrontError::Config(format!("{key} environment variable is required")))
}
